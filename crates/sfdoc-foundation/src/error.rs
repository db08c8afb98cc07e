//! Host-level error envelope
//!
//! Engine command failures and configuration failures carry their own
//! types; this one covers the host-side work of getting documents in
//! front of the engine: reading files, classifying them, and parsing
//! positional arguments.

use thiserror::Error;

/// Errors produced by sfdoc hosts.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumenterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl DocumenterError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type DocumenterResult<T> = Result<T, DocumenterError>;
