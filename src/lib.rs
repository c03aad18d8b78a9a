#![doc(
    html_logo_url = "https://thethirdvoice.ai/assets/thirdvoice.svg",
    issue_tracker_base_url = "https://github.com/thethirdvoice/thirdvoice/issues/"
)]

//! Offline emotion and sentiment inference for short interpersonal messages.
//!
//! This crate estimates the emotional content of a text message without any
//! network or model dependency. It is deterministic and works from static
//! tables built once per process.
//!
//! ## Pipeline
//!
//! 1. **Normalize** ([`normalize_text`]): drop URLs, mentions and tags,
//!    collapse whitespace, lowercase
//! 2. **Score** ([`scorer`]): tiered lexicon words (3/2/1) plus phrase
//!    patterns (2 each)
//! 3. **Intensity** ([`IntensityProfile`]): capitals and `!`/`?` on the
//!    original text scale the scores
//! 4. **Context** ([`RelationshipContext`]): a relationship label boosts
//!    selected emotions when the message mentions that relationship
//! 5. **Finalize** ([`EmotionReading`]): normalize to shares and pick the
//!    primary emotion
//!
//! A separate word-list [`Sentiment`] classifier runs over the same normalized
//! text, and [`generate_advice`] turns a result into a coaching sentence.
//!
//! ## Usage
//!
//! ```
//! use thirdvoice::{detect_emotion, generate_advice, Emotion};
//!
//! let result = detect_emotion("You always do this", None);
//! assert_eq!(result.primary_emotion(), Some(Emotion::Anger));
//!
//! let advice = generate_advice(&result, Some("coparenting"));
//! assert!(advice.contains("child"));
//! ```
//!
//! ## Failure mode
//!
//! Input whose trimmed length is under two characters yields
//! [`EmotionResult::TooShort`]. Every other input produces a reading; text
//! with no signal at all is reported as a confident `neutral`.

mod advice;
mod context;
mod emotion;
mod engine;
mod error;
mod intensity;
mod lexicon;
mod normalize;
mod patterns;
pub mod scorer;
mod sentiment;

pub use advice::{advise, COULD_NOT_ANALYZE, LOW_CONFIDENCE_ADVICE, LOW_CONFIDENCE_THRESHOLD};
pub use context::{ContextModifier, RelationshipContext};
pub use emotion::{Emotion, EmotionReading, EmotionResult, RawScores};
pub use engine::{Detection, EmotionEngine, MIN_TEXT_CHARS};
pub use error::{LexiconError, LexiconResult};
pub use intensity::{CapsIntensity, IntensityProfile, POSITIVE_MULTIPLIER_CAP};
pub use lexicon::{EmotionLexicon, LexiconEntry, Tier};
pub use normalize::normalize_text;
pub use patterns::{PatternSet, PATTERN_WEIGHT};
pub use scorer::{Evidence, EvidenceSource, Scorecard};
pub use sentiment::{
    classify_normalized, Sentiment, SentimentResult, NEUTRAL_CONFIDENCE, POLAR_CONFIDENCE,
};

/// Classify a message with the shared built-in engine.
///
/// `context` is a relationship label. Unknown labels behave as `general`.
pub fn detect_emotion(text: &str, context: Option<&str>) -> EmotionResult {
    EmotionEngine::shared().detect(text, context.map(RelationshipContext::parse))
}

/// Coaching advice for a result, with an optional relationship label.
pub fn generate_advice(result: &EmotionResult, context: Option<&str>) -> String {
    advise(result, context.map(RelationshipContext::parse))
}

/// Word-list sentiment of a raw message.
pub fn classify_sentiment(text: &str) -> SentimentResult {
    classify_normalized(&normalize_text(text))
}
