//! Error types for rollpack-rs.

use thiserror::Error;

/// The main error type for rollpack-rs operations.
#[derive(Error, Debug)]
pub enum RollpackError {
    /// A preset with the given name was not found.
    #[error("preset '{0}' not found")]
    PresetNotFound(String),

    /// A preset file did not contain what it claimed to.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for rollpack-rs operations.
pub type Result<T> = std::result::Result<T, RollpackError>;
