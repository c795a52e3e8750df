//! # Parkade Console Library
//!
//! Core library for the Parkade operator console.
//! This is the main entry point that loads configuration and runs the menu.
//!
//! ## Module Organization
//! ```text
//! parkade_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── menu.rs         ◄─── Menu loop and prompts
//! ├── console.rs      ◄─── Line I/O over BufRead/Write
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── lot.rs      ◄─── Slot occupancy and session counters
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── parking.rs  ◄─── Add / checkout / delete
//! │   ├── records.rs  ◄─── Record listing
//! │   └── report.rs   ◄─── Revenue report, free slots
//! └── error.rs        ◄─── Error type for commands
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod menu;
pub mod state;

use std::io;
use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use console::Console;
use menu::Session;
use state::ConfigState;

/// Runs the console until the operator exits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, parkade.toml, PARKADE_* variables                       │
/// │     • invalid configuration exits with status 1                         │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG, else config `log_filter` (default: warn)                │
/// │                                                                         │
/// │  3. Open Record File ─────────────────────────────────────────────────► │
/// │     • rebuild slot occupancy from open records                          │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • stdin / stdout until Exit or end of input                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let config = match ConfigState::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("parkade: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    info!(
        records = %config.records_path.display(),
        slots = config.slots,
        "Starting Parkade console"
    );

    let mut session = Session::start(config, Local::now());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match menu::run_menu(&mut session, &mut console) {
        Ok(()) => {
            info!("Console closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parkade_store=debug` - Record file activity only
/// - Default: `log_filter` from config
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
