//! # parkade-store: Record File Layer for Parkade
//!
//! This crate provides durable storage for parking records. Everything lives
//! in one text file with one record per line.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkade Data Flow                                │
//! │                                                                         │
//! │  Console command (checkout_record)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   parkade-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  RecordStore  │    │    format     │    │    error     │  │   │
//! │  │   │  (store.rs)   │───►│ encode_line   │    │  StoreError  │  │   │
//! │  │   │ append/update │    │ decode_line   │    │              │  │   │
//! │  │   │ remove/list   │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   parking_records.txt                                           │   │
//! │  │   1 KA01AB1234 09:00 11:30 150.00                               │   │
//! │  │   2 MH12XY9999 10:15 - 0.00                                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `RecordStore` and its file operations
//! - [`format`] - The on-disk line format
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parkade_store::RecordStore;
//!
//! let store = RecordStore::new("parking_records.txt");
//! store.append(&record)?;
//! let all = store.list_all()?;
//! ```

pub mod error;
pub mod format;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use format::{decode_line, encode_line, FormatError};
pub use store::RecordStore;

/// File name used when no path is configured.
pub const DEFAULT_RECORDS_FILE: &str = "parking_records.txt";
