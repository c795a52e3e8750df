//! # Lot State
//!
//! Slot occupancy and session counters for the running console.
//!
//! ## Lot Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Lot State Operations                                 │
//! │                                                                         │
//! │  Menu Action            Command               Lot State Change          │
//! │  ───────────            ───────               ────────────────          │
//! │                                                                         │
//! │  Add Record ──────────► add_record() ───────► allocate_slot()          │
//! │                                               record_entry()           │
//! │                                                                         │
//! │  Update Exit Time ────► checkout_record() ──► release_slot()           │
//! │                                               record_exit(fee)         │
//! │                                                                         │
//! │  Delete Record ───────► delete_record() ────► release_slot()           │
//! │                                                                         │
//! │  Revenue Report ──────► revenue_report() ───► (read only)              │
//! │                                                                         │
//! │  NOTE: The record file is the durable truth. Occupancy is rebuilt      │
//! │        from its open records on startup; counters start at zero.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The console is a single-threaded loop, so the state is owned by the
//! session and passed by `&mut` to the commands that change it.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use parkade_core::{Money, ParkingRecord, RevenueReport, SlotId, SlotRegistry};

/// In-memory view of the lot.
#[derive(Debug, Clone)]
pub struct LotState {
    registry: SlotRegistry,
    report: RevenueReport,
}

impl LotState {
    /// Creates a lot with every slot free and all counters at zero.
    pub fn new(capacity: u32, started_at: DateTime<Local>) -> Self {
        LotState {
            registry: SlotRegistry::new(capacity),
            report: RevenueReport::new(started_at),
        }
    }

    /// Creates a lot whose occupied slots match the given open records.
    ///
    /// ## Skipped Records
    /// - Closed records (they hold no slot)
    /// - Ids outside `1..=capacity`
    /// - A second open record for a slot that is already occupied
    ///
    /// Skipped open records are logged; they stay in the file untouched.
    pub fn restore(capacity: u32, records: &[ParkingRecord], started_at: DateTime<Local>) -> Self {
        let mut lot = LotState::new(capacity, started_at);

        for record in records.iter().filter(|r| r.is_open()) {
            if let Err(e) = SlotId::checked(record.id.get(), capacity) {
                warn!(
                    plate = %record.license_plate,
                    error = %e,
                    "Open record outside the lot, not restoring"
                );
                continue;
            }

            if !lot.registry.occupy(record.id) {
                warn!(
                    id = %record.id,
                    plate = %record.license_plate,
                    "Slot already held by another open record"
                );
            }
        }

        info!(
            occupied = lot.registry.occupied_count(),
            capacity, "Slot occupancy restored"
        );
        lot
    }

    /// Takes the lowest free slot.
    pub fn allocate_slot(&mut self) -> Option<SlotId> {
        self.registry.allocate()
    }

    /// Frees a slot. Freeing a free slot is a no-op.
    pub fn release_slot(&mut self, slot: SlotId) {
        self.registry.release(slot);
    }

    pub fn record_entry(&mut self) {
        self.report.record_entry();
    }

    pub fn record_exit(&mut self, fee: Money) {
        self.report.record_exit(fee);
    }

    pub fn capacity(&self) -> u32 {
        self.registry.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.registry.is_full()
    }

    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.registry.is_occupied(slot)
    }

    /// Free slots in ascending id order.
    pub fn available_slots(&self) -> Vec<SlotId> {
        self.registry.available()
    }

    pub fn report(&self) -> &RevenueReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkade_core::ClockTime;

    fn slot(id: u32) -> SlotId {
        SlotId::new(id).unwrap()
    }

    fn open(id: u32, plate: &str) -> ParkingRecord {
        ParkingRecord::open(slot(id), plate, ClockTime::new(9, 0))
    }

    #[test]
    fn test_new_lot_is_empty() {
        let lot = LotState::new(10, Local::now());
        assert_eq!(lot.capacity(), 10);
        assert_eq!(lot.available_slots().len(), 10);
        assert_eq!(lot.report().entries(), 0);
        assert!(lot.report().total_revenue().is_zero());
    }

    #[test]
    fn test_allocate_and_release() {
        let mut lot = LotState::new(2, Local::now());
        assert_eq!(lot.allocate_slot(), Some(slot(1)));
        assert_eq!(lot.allocate_slot(), Some(slot(2)));
        assert!(lot.is_full());
        assert_eq!(lot.allocate_slot(), None);

        lot.release_slot(slot(1));
        lot.release_slot(slot(1));
        assert_eq!(lot.available_slots(), vec![slot(1)]);
        assert_eq!(lot.allocate_slot(), Some(slot(1)));
    }

    #[test]
    fn test_restore_marks_open_records() {
        let mut closed = open(3, "CLOSED1");
        closed.check_out(ClockTime::new(10, 0));

        let records = vec![open(2, "OPEN2"), closed, open(5, "OPEN5")];
        let lot = LotState::restore(10, &records, Local::now());

        assert!(lot.is_occupied(slot(2)));
        assert!(!lot.is_occupied(slot(3)));
        assert!(lot.is_occupied(slot(5)));
        assert_eq!(lot.available_slots().len(), 8);
    }

    #[test]
    fn test_restore_skips_out_of_range_and_duplicates() {
        let records = vec![open(4, "FIRST"), open(4, "SECOND"), open(11, "FAR")];
        let lot = LotState::restore(10, &records, Local::now());

        assert_eq!(lot.available_slots().len(), 9);
        assert!(lot.is_occupied(slot(4)));
    }

    #[test]
    fn test_counters() {
        let mut lot = LotState::new(10, Local::now());
        lot.record_entry();
        lot.record_entry();
        lot.record_exit(Money::from_cents(5000));

        assert_eq!(lot.report().entries(), 2);
        assert_eq!(lot.report().exits(), 1);
        assert_eq!(lot.report().total_revenue(), Money::from_cents(5000));
    }
}
