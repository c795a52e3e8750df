//! # Record Store
//!
//! File operations for parking records.
//!
//! ## Key Operations
//! - Append a new record
//! - Close (check out) the open record for a slot
//! - Remove every record for a slot
//! - List records in file order
//!
//! ## Rewrite Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Whole-File Rewrite                                   │
//! │                                                                         │
//! │  parking_records.txt ──read──► Vec<ParkingRecord>                      │
//! │                                      │                                  │
//! │                              mutate / filter                            │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │  parking_records.txt.tmp ◄──write + fsync──                            │
//! │          │                                                              │
//! │          └──rename──► parking_records.txt   (atomic replace)           │
//! │                                                                         │
//! │  Lines may change length (plates, fees), so records are never          │
//! │  patched in place. A crash leaves either the old or the new file.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call opens, uses and closes its own file handles. The store is not
//! safe for concurrent use by several processes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::format::{decode_line, encode_line};
use parkade_core::{ParkingRecord, SlotId};

/// Flat-file store of parking records.
///
/// ## Usage
/// ```rust,ignore
/// let store = RecordStore::new("parking_records.txt");
///
/// store.append(&record)?;
/// let closed = store.find_and_update(slot, |r| { r.check_out(exit); })?;
/// let removed = store.find_and_remove(slot)?;
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a store backed by `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    /// Path of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the record file exists yet.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Appends one record to the end of the file.
    ///
    /// ## Returns
    /// * `Ok(())` - Record written
    /// * `Err(StoreError::Unavailable)` - File cannot be opened for writing
    pub fn append(&self, record: &ParkingRecord) -> StoreResult<()> {
        debug!(id = %record.id, plate = %record.license_plate, "Appending record");

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::unavailable(&self.path, e))?;

        writeln!(file, "{}", encode_line(record))?;
        file.flush()?;

        Ok(())
    }

    /// Reads every record in file order.
    ///
    /// A missing file means "no records".
    pub fn list_all(&self) -> StoreResult<Vec<ParkingRecord>> {
        self.read_records()
    }

    /// Records without an exit time.
    pub fn open_records(&self) -> StoreResult<Vec<ParkingRecord>> {
        let mut records = self.read_records()?;
        records.retain(ParkingRecord::is_open);
        Ok(records)
    }

    /// The open record for a slot, if any.
    pub fn find_open(&self, id: SlotId) -> StoreResult<Option<ParkingRecord>> {
        Ok(self
            .read_records()?
            .into_iter()
            .find(|r| r.id == id && r.is_open()))
    }

    /// Applies `mutate` to the first open record for `id` and rewrites the file.
    ///
    /// Closed records are history and are never matched, even though they
    /// share the slot's id.
    ///
    /// ## Returns
    /// * `Ok(Some(record))` - The record as written after `mutate`
    /// * `Ok(None)` - No open record for `id`; the file is untouched
    pub fn find_and_update<F>(&self, id: SlotId, mutate: F) -> StoreResult<Option<ParkingRecord>>
    where
        F: FnOnce(&mut ParkingRecord),
    {
        let mut records = self.read_records()?;

        let Some(position) = records.iter().position(|r| r.id == id && r.is_open()) else {
            debug!(id = %id, "No open record to update");
            return Ok(None);
        };

        mutate(&mut records[position]);
        self.replace_all(&records)?;

        info!(id = %id, "Record updated");
        Ok(Some(records[position].clone()))
    }

    /// Removes every record for `id` and rewrites the file.
    ///
    /// ## Returns
    /// Number of records removed. Zero means nothing matched and the file
    /// was left as it was.
    pub fn find_and_remove(&self, id: SlotId) -> StoreResult<usize> {
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = before - records.len();

        if removed == 0 {
            debug!(id = %id, "No record to remove");
            return Ok(0);
        }

        self.replace_all(&records)?;

        info!(id = %id, removed, "Records removed");
        Ok(removed)
    }

    fn read_records(&self) -> StoreResult<Vec<ParkingRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Record file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };

        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            match decode_line(&line) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(e) => {
                    warn!(line = index + 1, error = %e, "Unreadable record line");
                    return Err(StoreError::corrupt(index + 1, e.to_string()));
                }
            }
        }

        Ok(records)
    }

    /// Writes `records` to a sibling temp file and renames it over the store.
    fn replace_all(&self, records: &[ParkingRecord]) -> StoreResult<()> {
        replace_file(&self.path, &self.temp_path(), records)?;
        debug!(path = %self.path.display(), count = records.len(), "Record file replaced");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Writes `records` to `temp_path`, then renames it over `target`.
///
/// On any failure the temp file is removed and `target` is left as it was.
fn replace_file(target: &Path, temp_path: &Path, records: &[ParkingRecord]) -> StoreResult<()> {
    if let Err(e) = write_temp(temp_path, records) {
        let _ = fs::remove_file(temp_path);
        return Err(e);
    }

    if let Err(e) = fs::rename(temp_path, target) {
        let _ = fs::remove_file(temp_path);
        return Err(StoreError::ReplaceFailed(e.to_string()));
    }

    Ok(())
}

fn write_temp(temp_path: &Path, records: &[ParkingRecord]) -> StoreResult<()> {
    let file = File::create(temp_path).map_err(|e| StoreError::unavailable(temp_path, e))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(writer, "{}", encode_line(record))?;
    }

    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
