//! # Operator Menu
//!
//! The interactive loop behind the `parkade` binary.
//!
//! ## Menu Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Menu Cycle                                           │
//! │                                                                         │
//! │  ┌──────────────────┐                                                  │
//! │  │ Available slots  │◄──────────────────────────────────────┐          │
//! │  └────────┬─────────┘                                       │          │
//! │           ▼                                                 │          │
//! │  ┌──────────────────┐     ┌──────────────────┐     ┌────────┴───────┐  │
//! │  │   Menu + choice  │────►│  Prompt inputs   │────►│ Command result │  │
//! │  └────────┬─────────┘     └──────────────────┘     │ or "Error: .." │  │
//! │           │                                        └────────────────┘  │
//! │           │ 7 / end of input                                           │
//! │           ▼                                                            │
//! │  "Thank you! Visit again!"                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Command errors are printed and the loop carries on. Only I/O errors on
//! the terminal itself end the loop early.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use parkade_core::validation::parse_record_id;
use parkade_core::CoreError;
use parkade_store::RecordStore;

use crate::commands;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::state::{ConfigState, LotState};

const MENU_ITEMS: [&str; 7] = [
    "1. Add Parking Record",
    "2. Update Parking Record",
    "3. Delete Parking Record",
    "4. Track Entries and Exits",
    "5. Display All Records",
    "6. Generate Revenue Report",
    "7. Exit",
];

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecord,
    UpdateRecord,
    DeleteRecord,
    TrackEntries,
    DisplayRecords,
    RevenueReport,
    Exit,
}

impl MenuChoice {
    /// Parses the operator's choice; `None` for anything but 1-7.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddRecord),
            "2" => Some(MenuChoice::UpdateRecord),
            "3" => Some(MenuChoice::DeleteRecord),
            "4" => Some(MenuChoice::TrackEntries),
            "5" => Some(MenuChoice::DisplayRecords),
            "6" => Some(MenuChoice::RevenueReport),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Everything one run of the console works on.
#[derive(Debug)]
pub struct Session {
    pub config: ConfigState,
    pub lot: LotState,
    pub store: RecordStore,
}

impl Session {
    /// Opens the record file named by `config` and builds the lot.
    ///
    /// With `restore_slots` on, occupancy comes from the file's open
    /// records. If the file cannot be read the lot starts empty.
    pub fn start(config: ConfigState, started_at: DateTime<Local>) -> Self {
        let store = RecordStore::new(&config.records_path);

        let lot = if config.restore_slots {
            match store.open_records() {
                Ok(open) => LotState::restore(config.slots, &open, started_at),
                Err(e) => {
                    warn!(error = %e, "Could not read record file, starting with every slot free");
                    LotState::new(config.slots, started_at)
                }
            }
        } else {
            LotState::new(config.slots, started_at)
        };

        Session { config, lot, store }
    }
}

/// Runs the menu until the operator exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        show_available_slots(session, console)?;
        show_menu(console)?;

        let Some(input) = console.prompt("Enter your choice: ")? else {
            debug!("End of input at menu");
            return say_goodbye(console);
        };

        let flow = match MenuChoice::parse(&input) {
            Some(choice) => dispatch(session, console, choice)?,
            None => {
                console.line("Invalid choice! Please try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return say_goodbye(console);
        }
    }
}

fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
    choice: MenuChoice,
) -> io::Result<Flow> {
    debug!(?choice, "Menu choice");

    match choice {
        MenuChoice::AddRecord => add(session, console),
        MenuChoice::UpdateRecord => update(session, console),
        MenuChoice::DeleteRecord => delete(session, console),
        MenuChoice::TrackEntries | MenuChoice::DisplayRecords => {
            display_records(session, console)?;
            Ok(Flow::Continue)
        }
        MenuChoice::RevenueReport => {
            revenue_report(session, console)?;
            Ok(Flow::Continue)
        }
        MenuChoice::Exit => Ok(Flow::Exit),
    }
}

// =============================================================================
// Menu Actions
// =============================================================================

fn add<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> io::Result<Flow> {
    if session.lot.is_full() {
        let err: AppError = CoreError::SlotsExhausted {
            capacity: session.lot.capacity(),
        }
        .into();
        report_error(console, &err)?;
        return Ok(Flow::Continue);
    }

    let Some(plate) = console.prompt("Enter License Plate: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(entry) = console.prompt("Enter Entry Time (HH:MM): ")? else {
        return Ok(Flow::Exit);
    };

    match commands::add_record(&mut session.lot, &session.store, &plate, &entry) {
        Ok(added) => console.line(format!(
            "Parking Record Added Successfully! Assigned Slot ID: {}",
            added.slot_id
        ))?,
        Err(e) => report_error(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn update<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> io::Result<Flow> {
    let Some(input) = console.prompt("Enter ID of the parking record to update: ")? else {
        return Ok(Flow::Exit);
    };

    let found: AppResult<u32> = parse_record_id(&input)
        .map_err(AppError::from)
        .and_then(|id| commands::find_open_record(&session.store, id).map(|_| id));

    let id = match found {
        Ok(id) => id,
        Err(e) => {
            report_error(console, &e)?;
            return Ok(Flow::Continue);
        }
    };

    let Some(exit) = console.prompt("Enter Exit Time (HH:MM): ")? else {
        return Ok(Flow::Exit);
    };

    match commands::checkout_record(&mut session.lot, &session.store, id, &exit) {
        Ok(out) => {
            console.line(format!(
                "Parking Record Updated Successfully! Fee: {}",
                session.config.format_currency(out.fee)
            ))?;
            console.line(format!("Slot ID {} is now available.", out.slot_id))?;
        }
        Err(e) => report_error(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn delete<R: BufRead, W: Write>(session: &mut Session, console: &mut Console<R, W>) -> io::Result<Flow> {
    let Some(input) = console.prompt("Enter ID of the parking record to delete: ")? else {
        return Ok(Flow::Exit);
    };

    let result = parse_record_id(&input)
        .map_err(AppError::from)
        .and_then(|id| commands::delete_record(&mut session.lot, &session.store, id));

    match result {
        Ok(_) => console.line("Parking Record Deleted Successfully!")?,
        Err(e) => report_error(console, &e)?,
    }
    Ok(Flow::Continue)
}

fn display_records<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let records = match commands::list_records(&session.store) {
        Ok(records) => records,
        Err(e) => return report_error(console, &e),
    };

    console.blank()?;
    console.line("--- Parking Records ---")?;
    for record in &records {
        console.line(commands::render_record(record, &session.config))?;
    }
    Ok(())
}

fn revenue_report<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let report = commands::revenue_report(&session.lot);

    console.blank()?;
    console.line("--- Revenue Report ---")?;
    for line in report.render(&session.config) {
        console.line(line)?;
    }
    Ok(())
}

// =============================================================================
// Output Helpers
// =============================================================================

fn show_available_slots<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.blank()?;
    console.line("--- Available Parking Slots ---")?;
    for slot in commands::available_slots(&session.lot) {
        console.line(format!("Slot ID: {} is available.", slot))?;
    }
    Ok(())
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.blank()?;
    console.line("--- Parking Management System ---")?;
    for item in MENU_ITEMS {
        console.line(item)?;
    }
    Ok(())
}

fn report_error<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &AppError) -> io::Result<()> {
    debug!(code = ?err.code, message = %err.message, "Command failed");
    console.line(format!("Error: {}", err.message))
}

fn say_goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.line("Thank you! Visit again!")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    /// Scratch directory removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("parkade-menu-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn config(&self, slots: u32) -> ConfigState {
            ConfigState {
                records_path: self.0.join("records.txt"),
                slots,
                ..ConfigState::default()
            }
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        run_menu(session, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddRecord));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(&mut session, "7\n");
        assert!(out.contains("--- Available Parking Slots ---"));
        assert!(out.contains("Slot ID: 3 is available."));
        assert!(out.contains("--- Parking Management System ---"));
        assert!(out.contains("6. Generate Revenue Report"));
        assert!(out.ends_with("Thank you! Visit again!\n"));
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(&mut session, "");
        assert!(out.ends_with("Thank you! Visit again!\n"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(&mut session, "9\nabc\n7\n");
        assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
        assert_eq!(out.matches("--- Parking Management System ---").count(), 3);
    }

    #[test]
    fn test_add_update_report_session() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(
            &mut session,
            "1\nKA01AB1234\n10:00\n2\n1\n11:30\n5\n6\n7\n",
        );

        assert!(out.contains("Parking Record Added Successfully! Assigned Slot ID: 1"));
        assert!(out.contains("Parking Record Updated Successfully! Fee: $100.00"));
        assert!(out.contains("Slot ID 1 is now available."));
        assert!(out.contains(
            "ID: 1 | License Plate: KA01AB1234 | Entry Time: 10:00 | Exit Time: 11:30 | Fee: $100.00"
        ));
        assert!(out.contains("Total Revenue Generated: $100.00"));
        assert!(out.contains("Total Vehicle Entries: 1"));
        assert!(out.contains("Total Vehicle Exits: 1"));
    }

    #[test]
    fn test_invalid_utf8_input_keeps_session_alive() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let mut console = Console::new(Cursor::new(b"1\nKA\xff01\n10:00\n6\n7\n".to_vec()), Vec::new());
        run_menu(&mut session, &mut console).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert!(out.contains("Assigned Slot ID: 1"));
        assert!(out.contains("--- Revenue Report ---"));
        assert!(out.contains("Total Vehicle Entries: 1"));
        assert!(out.ends_with("Thank you! Visit again!\n"));
    }

    #[test]
    fn test_update_unknown_id_skips_exit_prompt() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(&mut session, "2\n5\n7\n");
        assert!(out.contains("Error: Record with ID 5 not found!"));
        assert!(!out.contains("Enter Exit Time"));
    }

    #[test]
    fn test_full_lot_reports_no_slots_without_prompting() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(1), Local::now());

        let out = run_script(&mut session, "1\nA1\n08:00\n1\n7\n");
        assert!(out.contains("Assigned Slot ID: 1"));
        assert!(out.contains("Error: No available parking slots!"));
        assert_eq!(out.matches("Enter License Plate: ").count(), 1);
    }

    #[test]
    fn test_delete_via_menu() {
        let scratch = Scratch::new();
        let mut session = Session::start(scratch.config(3), Local::now());

        let out = run_script(&mut session, "1\nA1\n08:00\n3\n1\n3\n1\n3\nx\n4\n7\n");
        assert!(out.contains("Parking Record Deleted Successfully!"));
        assert!(out.contains("Error: Record with ID 1 not found!"));
        assert!(out.contains("Error: record id has invalid format"));
        assert!(!out.contains("License Plate: A1"));
        assert!(session.store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_start_restores_open_records() {
        let scratch = Scratch::new();
        {
            let mut first = Session::start(scratch.config(3), Local::now());
            run_script(&mut first, "1\nA1\n08:00\n1\nB2\n08:05\n7\n");
        }

        let mut second = Session::start(scratch.config(3), Local::now());
        let out = run_script(&mut second, "6\n7\n");

        let slots_block = out.split("--- Parking Management System ---").next().unwrap();
        assert!(!slots_block.contains("Slot ID: 1 is available."));
        assert!(!slots_block.contains("Slot ID: 2 is available."));
        assert!(slots_block.contains("Slot ID: 3 is available."));
        assert!(out.contains("Total Vehicle Entries: 0"));
    }

    #[test]
    fn test_start_without_restore_frees_every_slot() {
        let scratch = Scratch::new();
        {
            let mut first = Session::start(scratch.config(2), Local::now());
            run_script(&mut first, "1\nA1\n08:00\n7\n");
        }

        let config = ConfigState {
            restore_slots: false,
            ..scratch.config(2)
        };
        let second = Session::start(config, Local::now());
        assert_eq!(second.lot.available_slots().len(), 2);
    }
}
