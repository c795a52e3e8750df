//! # Parking Commands
//!
//! Add, checkout and delete: the operations that change the lot.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Record Lifecycle                                     │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │   Free   │────►│   Open   │────►│  Closed  │  (kept in the file)     │
//! │  │   Slot   │     │  Record  │     │  Record  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲          add_record     checkout_record                        │
//! │       │               │                │                                │
//! │       │               └──── delete_record ─────► (all lines for id     │
//! │       │                                           removed)             │
//! │       └───────────── slot released on checkout and delete              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! The record file is written first. Lot state changes only after the write
//! succeeds, so a failed write leaves slots and counters as they were.

use tracing::{debug, info, warn};

use parkade_core::validation::{parse_clock_time, validate_license_plate};
use parkade_core::{CoreError, Money, ParkingRecord, SlotId};
use parkade_store::RecordStore;

use crate::error::{AppError, AppResult};
use crate::state::LotState;

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddResponse {
    pub slot_id: SlotId,
    pub record: ParkingRecord,
}

/// Result of a successful checkout.
#[derive(Debug, Clone)]
pub struct CheckoutResponse {
    /// The record as written back to the file
    pub record: ParkingRecord,

    pub fee: Money,

    /// Slot that is free again
    pub slot_id: SlotId,
}

/// Result of a successful delete.
#[derive(Debug, Clone)]
pub struct DeleteResponse {
    pub slot_id: SlotId,

    /// Number of lines removed from the file
    pub removed: usize,
}

/// Parks a vehicle in the lowest free slot.
///
/// ## Flow
/// 1. Validate plate and entry time
/// 2. Allocate a slot (`SlotsExhausted` if full; the file is not touched)
/// 3. Append the open record
/// 4. Count the entry
///
/// If the append fails the slot is released again before the error is
/// returned.
pub fn add_record(
    lot: &mut LotState,
    store: &RecordStore,
    plate: &str,
    entry_time: &str,
) -> AppResult<AddResponse> {
    debug!(plate, entry_time, "add_record command");

    let plate = validate_license_plate(plate)?;
    let entry_time = parse_clock_time(entry_time, "entry time")?;

    let slot_id = lot.allocate_slot().ok_or(CoreError::SlotsExhausted {
        capacity: lot.capacity(),
    })?;

    let record = ParkingRecord::open(slot_id, plate, entry_time);

    if let Err(e) = store.append(&record) {
        warn!(slot = %slot_id, "Append failed, releasing slot");
        lot.release_slot(slot_id);
        return Err(e.into());
    }

    lot.record_entry();

    info!(slot = %slot_id, plate = %record.license_plate, entry = %entry_time, "Vehicle parked");

    Ok(AddResponse { slot_id, record })
}

/// Looks up the open record for `id`.
///
/// The menu calls this before asking for an exit time.
pub fn find_open_record(store: &RecordStore, id: u32) -> AppResult<ParkingRecord> {
    let slot_id = SlotId::new(id).ok_or_else(|| AppError::not_found(id))?;

    store
        .find_open(slot_id)?
        .ok_or_else(|| AppError::not_found(id))
}

/// Closes the open record for `id` with the given exit time.
///
/// ## Flow
/// 1. Parse exit time
/// 2. Rewrite the file with the record's exit time and fee set
/// 3. Release the slot and count the exit
///
/// Closed records for the same id are never matched.
pub fn checkout_record(
    lot: &mut LotState,
    store: &RecordStore,
    id: u32,
    exit_time: &str,
) -> AppResult<CheckoutResponse> {
    debug!(id, exit_time, "checkout_record command");

    let exit_time = parse_clock_time(exit_time, "exit time")?;
    let slot_id = SlotId::new(id).ok_or_else(|| AppError::not_found(id))?;

    let record = store
        .find_and_update(slot_id, |record| {
            record.check_out(exit_time);
        })?
        .ok_or(CoreError::RecordNotFound { id })?;

    let fee = record.fee;
    lot.release_slot(slot_id);
    lot.record_exit(fee);

    info!(slot = %slot_id, plate = %record.license_plate, fee = %fee, "Vehicle checked out");

    Ok(CheckoutResponse {
        record,
        fee,
        slot_id,
    })
}

/// Removes every record for `id` and frees the slot.
///
/// Counters are not adjusted.
pub fn delete_record(lot: &mut LotState, store: &RecordStore, id: u32) -> AppResult<DeleteResponse> {
    debug!(id, "delete_record command");

    let slot_id = SlotId::new(id).ok_or_else(|| AppError::not_found(id))?;

    let removed = store.find_and_remove(slot_id)?;
    if removed == 0 {
        return Err(AppError::not_found(id));
    }

    lot.release_slot(slot_id);

    info!(slot = %slot_id, removed, "Records deleted");

    Ok(DeleteResponse { slot_id, removed })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Local;
    use parkade_core::{fee::compute_fee, ClockTime, HOURLY_RATE};
    use std::path::PathBuf;

    /// Scratch directory removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("parkade-cmd-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn store(&self) -> RecordStore {
            RecordStore::new(self.0.join("records.txt"))
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn lot(capacity: u32) -> LotState {
        LotState::new(capacity, Local::now())
    }

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_assigns_distinct_slots_until_full() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        for expected in 1..=10 {
            let added = add_record(&mut lot, &store, &format!("CAR{}", expected), "08:00").unwrap();
            assert_eq!(added.slot_id.get(), expected);
        }

        let err = add_record(&mut lot, &store, "CAR11", "08:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::SlotsExhausted);
        assert_eq!(err.message, "No available parking slots!");

        assert_eq!(store.list_all().unwrap().len(), 10);
        assert_eq!(lot.report().entries(), 10);
    }

    #[test]
    fn test_add_then_list_shows_open_record() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "  KA01AB1234 ", "10:00").unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].license_plate, "KA01AB1234");
        assert_eq!(records[0].exit_time, None);
        assert!(records[0].fee.is_zero());
    }

    #[test]
    fn test_add_rejects_bad_input_without_taking_a_slot() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        let err = add_record(&mut lot, &store, "", "10:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_record(&mut lot, &store, "KA01", "ten").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(lot.available_slots().len(), 10);
        assert!(!store.exists());
    }

    #[test]
    fn test_add_releases_slot_when_append_fails() {
        let scratch = Scratch::new();
        let store = RecordStore::new(scratch.0.join("missing-dir").join("records.txt"));
        let mut lot = lot(10);

        let err = add_record(&mut lot, &store, "KA01", "10:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert_eq!(lot.available_slots().len(), 10);
        assert_eq!(lot.report().entries(), 0);
    }

    #[test]
    fn test_checkout_charges_fee_and_frees_slot() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "FIRST", "09:00").unwrap();
        add_record(&mut lot, &store, "SECOND", "09:30").unwrap();

        let out = checkout_record(&mut lot, &store, 1, "12:00").unwrap();
        assert_eq!(out.fee, HOURLY_RATE * 3);
        assert_eq!(out.fee, compute_fee(time("09:00"), time("12:00")));
        assert_eq!(out.record.exit_time, Some(time("12:00")));
        assert!(!lot.is_occupied(SlotId::new(1).unwrap()));

        let listed = store.list_all().unwrap();
        assert_eq!(listed[0].exit_time, Some(time("12:00")));
        assert_eq!(listed[0].fee, HOURLY_RATE * 3);

        let again = add_record(&mut lot, &store, "THIRD", "13:00").unwrap();
        assert_eq!(again.slot_id.get(), 1);
    }

    #[test]
    fn test_checkout_not_found() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "ONLY", "09:00").unwrap();

        for id in [0, 2, 42] {
            let err = checkout_record(&mut lot, &store, id, "10:00").unwrap_err();
            assert_eq!(err.code, ErrorCode::RecordNotFound);
        }

        checkout_record(&mut lot, &store, 1, "10:00").unwrap();
        let err = checkout_record(&mut lot, &store, 1, "11:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
        assert_eq!(lot.report().exits(), 1);
    }

    #[test]
    fn test_checkout_matches_open_record_not_history() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(1);

        add_record(&mut lot, &store, "EARLY", "08:00").unwrap();
        checkout_record(&mut lot, &store, 1, "09:00").unwrap();
        add_record(&mut lot, &store, "LATE", "10:00").unwrap();

        let out = checkout_record(&mut lot, &store, 1, "10:30").unwrap();
        assert_eq!(out.record.license_plate, "LATE");

        let records = store.list_all().unwrap();
        assert_eq!(records[0].exit_time, Some(time("09:00")));
        assert_eq!(records[1].exit_time, Some(time("10:30")));
    }

    #[test]
    fn test_find_open_record() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "KA01", "09:00").unwrap();

        assert_eq!(find_open_record(&store, 1).unwrap().license_plate, "KA01");
        assert_eq!(
            find_open_record(&store, 2).unwrap_err().code,
            ErrorCode::RecordNotFound
        );
        assert_eq!(
            find_open_record(&store, 0).unwrap_err().code,
            ErrorCode::RecordNotFound
        );
    }

    #[test]
    fn test_failed_rewrite_keeps_slot_and_counters() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "STUCK", "09:00").unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();
        std::fs::create_dir(store.path().with_file_name("records.txt.tmp")).unwrap();

        let err = checkout_record(&mut lot, &store, 1, "11:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);

        let err = delete_record(&mut lot, &store, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);

        assert!(lot.is_occupied(SlotId::new(1).unwrap()));
        assert_eq!(lot.report().exits(), 0);
        assert!(lot.report().total_revenue().is_zero());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_unreadable_store_reports_storage_unavailable() {
        let scratch = Scratch::new();
        let store = RecordStore::new(scratch.0.clone());
        let mut lot = lot(10);
        let slot_id = lot.allocate_slot().unwrap();

        let err = checkout_record(&mut lot, &store, slot_id.get(), "11:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);

        let err = delete_record(&mut lot, &store, slot_id.get()).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);

        assert!(lot.is_occupied(slot_id));
        assert_eq!(lot.report().exits(), 0);
        assert!(lot.report().total_revenue().is_zero());
    }

    #[test]
    fn test_delete_removes_record_and_frees_slot() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "KEEP", "09:00").unwrap();
        add_record(&mut lot, &store, "DROP", "09:10").unwrap();

        let deleted = delete_record(&mut lot, &store, 2).unwrap();
        assert_eq!(deleted.removed, 1);
        assert!(!lot.is_occupied(SlotId::new(2).unwrap()));

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].license_plate, "KEEP");
        assert_eq!(lot.report().entries(), 2);
    }

    #[test]
    fn test_delete_nonexistent_leaves_store_unchanged() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "KA01", "09:00").unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let err = delete_record(&mut lot, &store, 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
        assert_eq!(err.message, "Record with ID 7 not found!");

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
        assert!(lot.is_occupied(SlotId::new(1).unwrap()));
    }

    #[test]
    fn test_delete_closed_record_is_harmless_for_slots() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "GONE", "09:00").unwrap();
        checkout_record(&mut lot, &store, 1, "10:00").unwrap();

        delete_record(&mut lot, &store, 1).unwrap();
        assert_eq!(lot.available_slots().len(), 10);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_revenue_matches_checkout_fees() {
        let scratch = Scratch::new();
        let store = scratch.store();
        let mut lot = lot(10);

        add_record(&mut lot, &store, "A", "09:00").unwrap();
        add_record(&mut lot, &store, "B", "09:00").unwrap();
        add_record(&mut lot, &store, "C", "09:00").unwrap();

        let fees: Money = [(1, "09:01"), (2, "11:00"), (3, "09:00")]
            .into_iter()
            .map(|(id, exit)| checkout_record(&mut lot, &store, id, exit).unwrap().fee)
            .sum();

        assert_eq!(fees, HOURLY_RATE * 3);
        assert_eq!(lot.report().total_revenue(), fees);
        assert_eq!(lot.report().entries(), 3);
        assert_eq!(lot.report().exits(), 3);
    }

    #[test]
    fn test_restart_restores_occupied_slots() {
        let scratch = Scratch::new();
        let store = scratch.store();

        {
            let mut first = lot(10);
            add_record(&mut first, &store, "A", "09:00").unwrap();
            add_record(&mut first, &store, "B", "09:00").unwrap();
            add_record(&mut first, &store, "C", "09:00").unwrap();
            checkout_record(&mut first, &store, 2, "10:00").unwrap();
        }

        let open = store.open_records().unwrap();
        let mut second = LotState::restore(10, &open, Local::now());

        assert!(second.is_occupied(SlotId::new(1).unwrap()));
        assert!(!second.is_occupied(SlotId::new(2).unwrap()));
        assert!(second.is_occupied(SlotId::new(3).unwrap()));
        assert_eq!(second.report().entries(), 0);

        let added = add_record(&mut second, &store, "D", "11:00").unwrap();
        assert_eq!(added.slot_id.get(), 2);
    }
}
