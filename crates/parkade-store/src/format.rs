//! # Record Line Format
//!
//! One record per line, fields separated by single spaces:
//!
//! ```text
//! id  plate       entry exit  fee
//! 1   KA01AB1234  09:00 11:30 150.00
//! 2   MH12XY9999  10:15 -     0.00      ← "-" = still parked
//! ```
//!
//! ## Legacy Lines
//! Older files wrote an empty exit time, which collapses to four fields
//! under whitespace splitting (`"2 MH12XY9999 10:15  0.00"`). Those lines
//! decode as open records. New lines always carry the `-` token.

use thiserror::Error;

use parkade_core::{ClockTime, Money, ParkingRecord, SlotId, EXIT_TIME_PLACEHOLDER};

/// Why a line could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid record id '{0}'")]
    InvalidId(String),

    #[error("invalid {field} '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("invalid fee '{0}'")]
    InvalidFee(String),
}

/// Encodes a record as one line, without the trailing newline.
///
/// ## Example
/// ```rust
/// use parkade_core::{ParkingRecord, SlotId};
/// use parkade_store::encode_line;
///
/// let record = ParkingRecord::open(SlotId::new(2).unwrap(), "MH12XY9999", "10:15".parse().unwrap());
/// assert_eq!(encode_line(&record), "2 MH12XY9999 10:15 - 0.00");
/// ```
pub fn encode_line(record: &ParkingRecord) -> String {
    let exit = match record.exit_time {
        Some(time) => time.to_string(),
        None => EXIT_TIME_PLACEHOLDER.to_string(),
    };

    format!(
        "{} {} {} {} {}",
        record.id,
        record.license_plate,
        record.entry_time,
        exit,
        record.fee.to_decimal_string()
    )
}

/// Decodes one line. Blank lines decode to `None`.
pub fn decode_line(line: &str) -> Result<Option<ParkingRecord>, FormatError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (id, plate, entry, exit, fee) = match fields.as_slice() {
        [] => return Ok(None),
        [id, plate, entry, fee] => (*id, *plate, *entry, None, *fee),
        [id, plate, entry, exit, fee] => (*id, *plate, *entry, Some(*exit), *fee),
        other => return Err(FormatError::FieldCount(other.len())),
    };

    let id = id
        .parse::<u32>()
        .ok()
        .and_then(SlotId::new)
        .ok_or_else(|| FormatError::InvalidId(id.to_string()))?;

    let entry_time = parse_time(entry, "entry time")?;

    let exit_time = match exit {
        None => None,
        Some(token) if token == EXIT_TIME_PLACEHOLDER => None,
        Some(token) => Some(parse_time(token, "exit time")?),
    };

    let fee: Money = fee
        .parse()
        .map_err(|_| FormatError::InvalidFee(fee.to_string()))?;

    Ok(Some(ParkingRecord {
        id,
        license_plate: plate.to_string(),
        entry_time,
        exit_time,
        fee,
    }))
}

fn parse_time(value: &str, field: &'static str) -> Result<ClockTime, FormatError> {
    value.parse().map_err(|_| FormatError::InvalidTime {
        field,
        value: value.to_string(),
    })
}
