//! Error types for tldr
//!
//! Every fallible operation in the crate returns [`Result`]. Errors fall into
//! four classes: validation (bad caller input), configuration (malformed
//! vocabulary source or config), I/O, and degenerate input.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TldrError>;

/// Errors produced while summarizing a document
#[derive(Debug, Error)]
pub enum TldrError {
    /// A textual value could not be interpreted as the expected type
    #[error("invalid {field}: expected {expected}, got {value:?}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A numeric value fell outside its permitted range
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Selection mode is not one of the supported literals
    #[error("unknown selection mode {0:?} (expected one of: value, length, best)")]
    UnknownMode(String),

    /// Malformed configuration or vocabulary source
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON in a vocabulary or config source
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV in a vocabulary source
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A document or vocabulary file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input carries nothing to summarize
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl TldrError {
    /// Shorthand for [`TldrError::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        TldrError::InvalidConfig(msg.into())
    }

    /// Shorthand for [`TldrError::DegenerateInput`]
    pub fn degenerate(msg: impl Into<String>) -> Self {
        TldrError::DegenerateInput(msg.into())
    }

    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TldrError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error rejects caller-supplied parameters
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TldrError::TypeMismatch { .. } | TldrError::OutOfRange { .. } | TldrError::UnknownMode(_)
        )
    }

    /// Whether this error comes from a malformed configuration source
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TldrError::InvalidConfig(_) | TldrError::Json(_) | TldrError::Csv(_)
        )
    }
}
