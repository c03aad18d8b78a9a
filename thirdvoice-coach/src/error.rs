//! Error types for the coaching layer.

use std::path::PathBuf;
use std::time::Duration;

use thirdvoice::LexiconError;
use thiserror::Error;

/// Errors that can occur while coaching a message.
#[derive(Debug, Error)]
pub enum CoachError {
    /// The message is empty or too short to analyze
    #[error("message is too short to analyze")]
    MessageTooShort,

    /// The remote model reported a failure
    #[error("remote model '{backend}' failed: {message}")]
    Remote { backend: String, message: String },

    /// The remote model did not answer in time
    #[error("remote model timed out after {0:?}")]
    Timeout(Duration),

    /// The remote model answered with something unusable
    #[error("invalid model response: {0}")]
    InvalidModelResponse(String),

    /// IO error reading a config file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML in a config file
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A lexicon override names an emotion that does not exist
    #[error("unknown emotion '{0}' in lexicon overrides")]
    UnknownEmotion(String),

    /// Lexicon overrides conflict with the built-in tables
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Result type alias for coaching operations.
pub type CoachResult<T> = Result<T, CoachError>;
