//! Error types for documentation generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during documentation generation.
#[derive(Debug, Error)]
pub enum DocsError {
    /// No recognized output format or destination was given.
    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),

    /// The destination could not be opened for writing.
    #[error("cannot open {path} for writing: {source}")]
    SinkUnavailable {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The sink rejected a write mid-generation.
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Two catalog properties share a key.
    #[error("duplicate property key: {0}")]
    DuplicateKey(String),
}
