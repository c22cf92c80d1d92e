//! Error types for `confdoc`
//!
//! Catalog loading errors, the top-level error aggregate, and the exit
//! codes the CLI maps them to.

use std::path::PathBuf;
use thiserror::Error;

use crate::docgen::error::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `confdoc` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Catalog error (invalid YAML, unknown type, duplicate key)
    pub const CONFIG_ERROR: i32 = 2;

    /// Output error (sink unavailable, write failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (no format or destination given)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `confdoc` operations.
#[derive(Debug, Error)]
pub enum ConfdocError {
    /// Catalog loading error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Documentation generation error
    #[error(transparent)]
    Docs(#[from] DocsError),
}

impl ConfdocError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Docs(err) => match err {
                DocsError::InvalidInvocation(_) => ExitCode::USAGE_ERROR,
                DocsError::SinkUnavailable { .. } | DocsError::Write(_) => ExitCode::IO_ERROR,
                DocsError::DuplicateKey(_) => ExitCode::CONFIG_ERROR,
            },
        }
    }
}

// ============================================================================
// Catalog Errors
// ============================================================================

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the catalog file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Catalog file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Catalog file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Unreadable {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A property declares a type outside the known enumeration
    #[error("unknown property type '{name}' for '{key}'{}", suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")))]
    UnknownPropertyType {
        /// Key of the offending property
        key: String,
        /// Type name as written in the catalog
        name: String,
        /// Closest known type name, if any
        suggestion: Option<&'static str>,
    },
}

// ============================================================================
// Tests
// ============================================================================
