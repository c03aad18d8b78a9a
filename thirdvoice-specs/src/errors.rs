//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading or validating fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Malformed TOML or a field of the wrong type.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// The fixture parsed but its cases are inconsistent.
    #[error("invalid case '{case}': {message}")]
    Invalid { case: String, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
