//! # Error Types
//!
//! Domain-specific error types for parkade-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  parkade-core errors (this file)                                       │
//! │  ├── CoreError        - Slot and record rule violations                │
//! │  └── ValidationError  - Operator input failures                        │
//! │                                                                         │
//! │  parkade-store errors (separate crate)                                 │
//! │  └── StoreError       - Record file failures                           │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                   │
//! │                         StoreError ─┴→ AppError → Console              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Every slot in the lot is occupied.
    ///
    /// ## When This Occurs
    /// - Adding a vehicle while `capacity` records are open
    #[error("No available parking slots (capacity {capacity})")]
    SlotsExhausted { capacity: u32 },

    /// No record with this id matches the operation.
    ///
    /// ## When This Occurs
    /// - Checkout of an id with no open record
    /// - Delete of an id that is not in the store
    #[error("Record with ID {id} not found")]
    RecordNotFound { id: u32 },

    /// The id is outside the lot's slot range.
    #[error("Slot ID {id} is out of range (1-{capacity})")]
    InvalidSlot { id: u32, capacity: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input cannot be parsed or cannot be
/// represented in the record file.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a time without a colon).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
