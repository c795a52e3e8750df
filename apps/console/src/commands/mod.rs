//! # Console Commands
//!
//! Operations behind the menu entries.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Categories                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  PARKING (parking.rs)                                           │   │
//! │  │  • add_record(plate, entry) → AddResponse                       │   │
//! │  │  • find_open_record(id) → ParkingRecord                         │   │
//! │  │  • checkout_record(id, exit) → CheckoutResponse                 │   │
//! │  │  • delete_record(id) → DeleteResponse                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  RECORDS (records.rs)                                           │   │
//! │  │  • list_records() → Vec<ParkingRecord>                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  REPORT (report.rs)                                             │   │
//! │  │  • revenue_report() → ReportResponse                            │   │
//! │  │  • available_slots() → Vec<SlotId>                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never print. They return a response or an `AppError` and the
//! menu renders it.

pub mod parking;
pub mod records;
pub mod report;

pub use parking::*;
pub use records::*;
pub use report::*;
