//! Ingestion error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning paths into catalog entries
#[derive(Debug, Error)]
pub enum IngestError {
    /// Path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Path exists but is a directory or special file
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Path is not absolute, so it has no `file://` form
    #[error("Not an absolute path: {}", .0.display())]
    RelativePath(PathBuf),

    /// Glob pattern matched nothing
    #[error("No files match '{0}'")]
    NoMatch(String),

    /// Path has no usable file name
    #[error("Path has no file name: {}", .0.display())]
    EmptyName(PathBuf),

    /// Glob pattern failed to parse
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Interactive tag prompt failed
    #[error("Tag prompt failed: {0}")]
    Prompt(String),

    /// Underlying filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for ingestion
pub type Result<T> = std::result::Result<T, IngestError>;
