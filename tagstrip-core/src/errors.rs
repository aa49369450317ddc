//! errors.rs - Custom error types for the tagstrip-core library.
//!
//! This module defines a structured error enum for the library, so callers can
//! tell an unreadable input apart from a broken blacklist.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by `tagstrip-core`.
///
/// Marked `#[non_exhaustive]`: new variants may be added without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TagStripError {
    /// The input document is missing, unreadable or permission-denied.
    #[error("Cannot read input file '{}': {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compile blacklist pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Blacklist pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

impl TagStripError {
    /// Wraps an I/O failure on the input path.
    pub fn input_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TagStripError::InputUnavailable {
            path: path.into(),
            source,
        }
    }
}
