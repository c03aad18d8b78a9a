//! Error types for building custom lexicons and pattern sets.
//!
//! Detection itself never fails. These errors only come out of constructing
//! tables from caller-supplied data.

use thiserror::Error;

use crate::{Emotion, Tier};

/// Errors raised while validating lexicon or pattern tables.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A word appears twice within one emotion's tiers.
    #[error("duplicate trigger word {word:?} for {emotion} (already in {existing:?}, again in {duplicate:?})")]
    DuplicateWord {
        emotion: Emotion,
        word: String,
        existing: Tier,
        duplicate: Tier,
    },

    /// A trigger word is empty after normalization.
    #[error("empty trigger word for {emotion} in {tier:?} tier")]
    EmptyWord { emotion: Emotion, tier: Tier },

    /// `Neutral` cannot carry lexicon words or patterns.
    #[error("neutral is not a scored emotion")]
    UnscoredEmotion,

    /// A pattern failed to compile.
    #[error("invalid pattern for {emotion}: {source}")]
    InvalidPattern {
        emotion: Emotion,
        #[source]
        source: regex::Error,
    },
}

/// Result type for table construction.
pub type LexiconResult<T> = Result<T, LexiconError>;
