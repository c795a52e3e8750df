//! # State Module
//!
//! Manages application state for the operator console.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Menu Session                               │   │
//! │  │  owns config, lot and store for the life of the process         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ RecordStore  │  │   LotState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  record file │  │  slots       │  │  records_path    │              │
//! │  │  (durable)   │  │  counters    │  │  slots           │              │
//! │  │              │  │  (memory)    │  │  currency        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • LotState: mutated only through `&mut` by commands                   │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod lot;

pub use config::{ConfigError, ConfigState};
pub use lot::LotState;
