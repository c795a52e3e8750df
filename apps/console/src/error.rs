//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Parkade                                │
//! │                                                                         │
//! │  Menu choice                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::Unavailable(..) ────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Rule Error? ──── CoreError::SlotsExhausted ───── AppError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu prints "Error: <message>" and shows the menu again. No error     │
//! │  ends the process.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parkade_core::{CoreError, ValidationError};
use parkade_store::StoreError;
use thiserror::Error;

/// Error returned from console commands.
#[derive(Debug, Clone, Error)]
#[error("[{code:?}] {message}")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The record file could not be opened, written or replaced
    StorageUnavailable,

    /// Every slot is occupied
    SlotsExhausted,

    /// No record matched the requested id
    RecordNotFound,

    /// Operator input could not be parsed
    ValidationError,

    /// The record file holds a line that cannot be decoded
    CorruptStore,
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(id: u32) -> Self {
        AppError::new(
            ErrorCode::RecordNotFound,
            format!("Record with ID {} not found!", id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to console errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { path, reason } => {
                tracing::error!(%path, %reason, "Record file unavailable");
                AppError::new(
                    ErrorCode::StorageUnavailable,
                    format!("Unable to open file {}: {}", path, reason),
                )
            }
            StoreError::Corrupt { line, reason } => AppError::new(
                ErrorCode::CorruptStore,
                format!("Record file is damaged at line {} ({})", line, reason),
            ),
            StoreError::ReplaceFailed(e) => {
                tracing::error!("Record file replace failed: {}", e);
                AppError::new(ErrorCode::StorageUnavailable, "Unable to save record file")
            }
            StoreError::Io(e) => {
                tracing::error!("Record file I/O failed: {}", e);
                AppError::new(ErrorCode::StorageUnavailable, "Unable to read or write record file")
            }
        }
    }
}

/// Converts core errors to console errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SlotsExhausted { .. } => {
                AppError::new(ErrorCode::SlotsExhausted, "No available parking slots!")
            }
            CoreError::RecordNotFound { id } => AppError::not_found(id),
            CoreError::InvalidSlot { .. } => AppError::validation(err.to_string()),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Result type for console commands.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: AppError = CoreError::SlotsExhausted { capacity: 10 }.into();
        assert_eq!(err.code, ErrorCode::SlotsExhausted);

        let err: AppError = CoreError::RecordNotFound { id: 7 }.into();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
        assert_eq!(err.message, "Record with ID 7 not found!");
    }

    #[test]
    fn test_store_errors_map_to_codes() {
        let err: AppError = StoreError::Unavailable {
            path: "records.txt".to_string(),
            reason: "Permission denied".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert!(err.message.contains("Permission denied"));

        let err: AppError = StoreError::corrupt(2, "expected 5 fields, found 1").into();
        assert_eq!(err.code, ErrorCode::CorruptStore);
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::not_found(3);
        assert_eq!(err.to_string(), "[RecordNotFound] Record with ID 3 not found!");
    }
}
