//! # parkade-core: Pure Business Logic for Parkade
//!
//! This crate is the **heart** of Parkade. It contains the slot bookkeeping,
//! fee rules and reporting counters as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkade Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Operator Console (menu)                      │   │
//! │  │    Add ──► Checkout ──► Delete ──► List ──► Revenue Report      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parkade-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   slots   │  │    fee    │  │  report   │  │   │
//! │  │   │  Record   │  │ Registry  │  │ hourly    │  │ revenue   │  │   │
//! │  │   │ ClockTime │  │ allocate  │  │ rounding  │  │ counters  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 parkade-store (Record File Layer)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ParkingRecord, SlotId, ClockTime)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`fee`] - Hourly fee calculation
//! - [`slots`] - In-memory slot registry
//! - [`report`] - Revenue and traffic counters
//! - [`error`] - Domain error types
//! - [`validation`] - Operator input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use parkade_core::fee::compute_fee;
//! use parkade_core::types::ClockTime;
//! use parkade_core::HOURLY_RATE;
//!
//! let entry: ClockTime = "10:00".parse().unwrap();
//! let exit: ClockTime = "10:01".parse().unwrap();
//!
//! // One minute over still bills a whole hour
//! assert_eq!(compute_fee(entry, exit), HOURLY_RATE);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fee;
pub mod money;
pub mod report;
pub mod slots;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::RevenueReport;
pub use slots::SlotRegistry;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of parking slots in the lot when nothing else is configured.
pub const MAX_SLOTS: u32 = 10;

/// Fee charged per started hour of parking ($50.00).
///
/// ## Business Reason
/// Partial hours round up, so a one-minute stay costs one full hour.
pub const HOURLY_RATE: Money = Money::from_cents(5000);

/// Token written to the record file in place of a missing exit time.
pub const EXIT_TIME_PLACEHOLDER: &str = "-";
