//! Phrase-level cues that single-word lexicon matching misses.
//!
//! Each pattern is a regular expression run against normalized text. A match
//! anywhere adds [`PATTERN_WEIGHT`] to its emotion, once per pattern.

use regex::Regex;

use crate::{Emotion, LexiconError, LexiconResult};

/// Score added for every pattern that matches.
pub const PATTERN_WEIGHT: f64 = 2.0;

const ANGER_PATTERNS: &[&str] = &[
    // Absolutist blame
    r"\byou (?:always|never)\b",
    r"\b(?:it'?s|this is|that'?s) (?:all )?your fault\b",
    r"\bhow (?:dare|could) you\b",
    r"\bwhat(?:'s| is) wrong with you\b",
    r"\bi(?:'m| am) (?:so )?done with\b",
];

const SADNESS_PATTERNS: &[&str] = &[
    r"\bi (?:just )?can'?t (?:do this|take it) anymore\b",
    r"\bnobody (?:cares|understands)\b",
    r"\bi feel (?:so )?(?:alone|empty|worthless)\b",
    r"\bi miss (?:us|how)\b",
];

const FEAR_PATTERNS: &[&str] = &[
    // Hedged anxiety
    r"\bwhat if\b",
    r"\bi(?:'m| am) (?:really |so )?(?:worried|scared|afraid) (?:that|about)\b",
    r"\bwhat(?:'s| is) going to happen\b",
    r"\bsomething (?:is wrong|bad)\b",
];

const JOY_PATTERNS: &[&str] = &[
    r"\bi(?:'m| am) so (?:happy|glad|proud)\b",
    r"\bthank you (?:so much|for)\b",
    r"\bcan'?t wait\b",
];

const SURPRISE_PATTERNS: &[&str] = &[
    r"\bi can'?t believe\b",
    r"\bwait,? what\b",
    r"\bdidn'?t (?:see|expect) (?:that|this)\b",
];

const DISGUST_PATTERNS: &[&str] = &[
    r"\bmakes? me sick\b",
    r"\bhow could anyone\b",
    r"\bthat(?:'s| is) (?:so )?(?:gross|disgusting)\b",
];

fn builtin_sources(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anger => ANGER_PATTERNS,
        Emotion::Sadness => SADNESS_PATTERNS,
        Emotion::Fear => FEAR_PATTERNS,
        Emotion::Joy => JOY_PATTERNS,
        Emotion::Surprise => SURPRISE_PATTERNS,
        Emotion::Disgust => DISGUST_PATTERNS,
        Emotion::Neutral => &[],
    }
}

/// Compiled patterns for the six scored emotions.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: [Vec<Regex>; 6],
}

impl PatternSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in pattern set.
    pub fn builtin() -> LexiconResult<Self> {
        let mut set = Self::empty();
        for emotion in Emotion::SCORED {
            for source in builtin_sources(emotion) {
                set.add(emotion, source)?;
            }
        }
        Ok(set)
    }

    /// Compile and add a pattern for an emotion.
    pub fn add(&mut self, emotion: Emotion, source: &str) -> LexiconResult<()> {
        let slot = emotion.slot().ok_or(LexiconError::UnscoredEmotion)?;
        let regex =
            Regex::new(source).map_err(|source| LexiconError::InvalidPattern { emotion, source })?;
        self.patterns[slot].push(regex);
        Ok(())
    }

    /// Patterns for one emotion. Empty for `Neutral`.
    pub fn patterns(&self, emotion: Emotion) -> &[Regex] {
        match emotion.slot() {
            Some(slot) => &self.patterns[slot],
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
