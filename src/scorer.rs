//! Lexicon and pattern scoring over normalized text.
//!
//! Word matching is substring-based: a trigger word contributes its tier
//! weight once if it occurs anywhere in the text, however many times it
//! repeats. Distinct words that overlap (`scared`, `scared to death`) each
//! contribute. Every pattern that matches adds [`PATTERN_WEIGHT`] once.

use serde::Serialize;

use crate::{Emotion, EmotionLexicon, PatternSet, RawScores, Tier, PATTERN_WEIGHT};

/// Why an emotion received score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceSource {
    /// A lexicon word occurred in the text
    Word { word: String, tier: Tier },
    /// A phrase pattern matched; `matched` is the first matching span
    Pattern { pattern: String, matched: String },
}

/// One scoring contribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pub emotion: Emotion,
    pub weight: f64,
    pub source: EvidenceSource,
}

impl Evidence {
    /// The text that fired: the trigger word, or the matched phrase.
    pub fn surface_text(&self) -> &str {
        match &self.source {
            EvidenceSource::Word { word, .. } => word,
            EvidenceSource::Pattern { matched, .. } => matched,
        }
    }
}

/// Unmodified scores plus the contributions that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorecard {
    pub scores: RawScores,
    pub evidence: Vec<Evidence>,
}

impl Scorecard {
    /// Evidence for one emotion, in scoring order.
    pub fn evidence_for(&self, emotion: Emotion) -> impl Iterator<Item = &Evidence> {
        self.evidence.iter().filter(move |e| e.emotion == emotion)
    }
}

/// Score normalized text against a lexicon and pattern set.
pub fn score_text(normalized: &str, lexicon: &EmotionLexicon, patterns: &PatternSet) -> Scorecard {
    let mut card = Scorecard::default();

    for emotion in Emotion::SCORED {
        for entry in lexicon.entries(emotion) {
            if normalized.contains(entry.word.as_str()) {
                let weight = entry.tier.weight();
                card.scores.add(emotion, weight);
                card.evidence.push(Evidence {
                    emotion,
                    weight,
                    source: EvidenceSource::Word {
                        word: entry.word.clone(),
                        tier: entry.tier,
                    },
                });
            }
        }

        for pattern in patterns.patterns(emotion) {
            if let Some(found) = pattern.find(normalized) {
                card.scores.add(emotion, PATTERN_WEIGHT);
                card.evidence.push(Evidence {
                    emotion,
                    weight: PATTERN_WEIGHT,
                    source: EvidenceSource::Pattern {
                        pattern: pattern.as_str().to_string(),
                        matched: found.as_str().to_string(),
                    },
                });
            }
        }
    }

    card
}
