//! Positive/negative/neutral sentiment by word-list presence.
//!
//! Two disjoint lists, no tiers, no intensity or context modifiers. The
//! confidences are fixed per outcome rather than computed.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "love",
    "happy",
    "glad",
    "thanks",
    "thank you",
    "appreciate",
    "wonderful",
    "amazing",
    "excited",
    "grateful",
    "nice",
    "awesome",
    "proud",
    "excellent",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "hate",
    "angry",
    "sad",
    "terrible",
    "awful",
    "upset",
    "frustrated",
    "annoyed",
    "hurt",
    "disappointed",
    "worried",
    "never",
    "ruin",
    "horrible",
    "worst",
];

/// Confidence reported for a positive or negative outcome.
pub const POLAR_CONFIDENCE: f64 = 0.7;
/// Confidence reported for a neutral outcome.
pub const NEUTRAL_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    /// Distinct positive-list words present.
    pub positive_hits: usize,
    /// Distinct negative-list words present.
    pub negative_hits: usize,
}

/// Classify text that has already been through
/// [`normalize_text`](crate::normalize_text).
pub fn classify_normalized(normalized: &str) -> SentimentResult {
    let positive_hits = count_present(POSITIVE_WORDS, normalized);
    let negative_hits = count_present(NEGATIVE_WORDS, normalized);

    let (sentiment, confidence) = if positive_hits > negative_hits {
        (Sentiment::Positive, POLAR_CONFIDENCE)
    } else if negative_hits > positive_hits {
        (Sentiment::Negative, POLAR_CONFIDENCE)
    } else {
        (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
    };

    SentimentResult {
        sentiment,
        confidence,
        positive_hits,
        negative_hits,
    }
}

fn count_present(words: &[&str], normalized: &str) -> usize {
    words.iter().filter(|w| normalized.contains(*w)).count()
}
