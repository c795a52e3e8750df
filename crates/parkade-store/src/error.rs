//! # Store Error Types
//!
//! Error types for record file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / FormatError                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path / line context                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console) ← Code + operator message                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use thiserror::Error;

/// Record store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record file could not be opened.
    ///
    /// ## When This Occurs
    /// - Directory does not exist
    /// - File permissions issue
    /// - Path points to a directory
    #[error("Unable to open record file {path}: {reason}")]
    Unavailable { path: String, reason: String },

    /// A line in the record file could not be decoded.
    ///
    /// The operation is aborted before anything is rewritten, so the
    /// unreadable line stays on disk for manual repair.
    #[error("Record file is corrupt at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    /// The rewritten file could not be moved over the original.
    #[error("Failed to replace record file: {0}")]
    ReplaceFailed(String),

    /// Read or write failed after the file was opened.
    #[error("Record file I/O failed: {0}")]
    Io(String),
}

impl StoreError {
    /// Creates an Unavailable error for a path.
    pub fn unavailable(path: &Path, err: impl std::fmt::Display) -> Self {
        StoreError::Unavailable {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Creates a Corrupt error for a 1-based line number.
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            line,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
