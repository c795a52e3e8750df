//! # Seed Data Generator
//!
//! Populates a record file with demo parking records for development.
//!
//! ## Usage
//! ```bash
//! # Generate 25 records (default) into ./parking_records.txt
//! cargo run -p parkade-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p parkade-store --bin seed -- --count 40
//!
//! # Specify record file path
//! cargo run -p parkade-store --bin seed -- --path ./data/records.txt
//! ```
//!
//! ## Generated Records
//! Records cycle through slots 1-10. Every slot's latest record is left
//! open (still parked); earlier records for the slot are checked out with
//! a fee computed by the normal fee rules.

use std::env;

use parkade_core::{ClockTime, ParkingRecord, SlotId, MAX_SLOTS};
use parkade_store::{RecordStore, DEFAULT_RECORDS_FILE};

/// State codes used to build plausible plates
const STATES: &[&str] = &["KA", "MH", "DL", "TN", "GJ", "RJ", "UP", "WB"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: u32 = 25;
    let mut path = String::from(DEFAULT_RECORDS_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args.get(i + 1).ok_or("--count needs a value")?;
                count = parse_count(value)?;
                i += 1;
            }
            "--path" | "-p" => {
                if i + 1 < args.len() {
                    path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Parkade Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>     Number of records to generate (default: 25)");
                println!("  -p, --path <PATH>   Record file path (default: ./{})", DEFAULT_RECORDS_FILE);
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Parkade Seed Data Generator");
    println!("===========================");
    println!("Record file: {}", path);
    println!("Records: {}", count);
    println!();

    let store = RecordStore::new(&path);

    let existing = store.list_all()?.len();
    if existing > 0 {
        println!("⚠ Record file already has {} records", existing);
        println!("  Skipping seed to avoid clashing slot ids.");
        println!("  Delete the file to regenerate.");
        return Ok(());
    }

    let mut open_slots = 0;
    for seq in 0..count {
        let record = generate_record(seq, count);
        if record.is_open() {
            open_slots += 1;
        }
        store.append(&record)?;
    }

    println!("✓ Generated {} records ({} vehicles still parked)", count, open_slots);
    Ok(())
}

/// Parses the `--count` value; anything but a whole number is an error.
fn parse_count(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid --count '{}': expected a whole number", value))
}

/// Generates the `seq`-th record out of `count`.
///
/// The last record written for each slot stays open so the file never has
/// two open records for one slot.
fn generate_record(seq: u32, count: u32) -> ParkingRecord {
    let slot = SlotId::from_index((seq % MAX_SLOTS) as usize);
    let plate = format!(
        "{}{:02}AB{:04}",
        STATES[seq as usize % STATES.len()],
        (seq * 7) % 99 + 1,
        (seq * 389) % 10000
    );

    let entry = ClockTime::new(6 + seq % 10, (seq * 13) % 60);
    let mut record = ParkingRecord::open(slot, plate, entry);

    let is_last_for_slot = seq + MAX_SLOTS >= count;
    if !is_last_for_slot {
        let stay_minutes = 20 + (seq * 37) % 300;
        let exit_total = entry.total_minutes() as u32 + stay_minutes;
        record.check_out(ClockTime::new(exit_total / 60, exit_total % 60));
    }

    record
}
