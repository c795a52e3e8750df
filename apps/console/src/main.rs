//! # Parkade Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parkade Console                                  │
//! │                                                                         │
//! │  main.rs ────► hands off to parkade_console::run()                     │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, session startup                        │
//! │                                                                         │
//! │  menu.rs ────► operator menu over stdin/stdout                         │
//! │                                                                         │
//! │  parking_records.txt  (one line per record, kept forever)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs so the menu can be tested
    parkade_console::run()
}
