//! # Report Commands
//!
//! Session revenue report and the free-slot listing shown before each menu.
//!
//! ```text
//! --- Revenue Report ---
//! Total Revenue Generated: $150.00
//! Total Vehicle Entries: 4
//! Total Vehicle Exits: 2
//! Session Started: 2026-10-19 08:00:00
//! ```

use chrono::{DateTime, Local};
use tracing::debug;

use parkade_core::{Money, SlotId};

use crate::state::{ConfigState, LotState};

/// Snapshot of the session counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportResponse {
    pub total_revenue: Money,
    pub entries: u32,
    pub exits: u32,
    pub started_at: DateTime<Local>,

    /// Slots occupied right now
    pub occupied: u32,
    pub capacity: u32,
}

impl ReportResponse {
    /// Lines printed under the report heading.
    pub fn render(&self, config: &ConfigState) -> Vec<String> {
        vec![
            format!(
                "Total Revenue Generated: {}",
                config.format_currency(self.total_revenue)
            ),
            format!("Total Vehicle Entries: {}", self.entries),
            format!("Total Vehicle Exits: {}", self.exits),
            format!("Slots Occupied: {}/{}", self.occupied, self.capacity),
            format!(
                "Session Started: {}",
                self.started_at.format("%Y-%m-%d %H:%M:%S")
            ),
        ]
    }
}

pub fn revenue_report(lot: &LotState) -> ReportResponse {
    debug!("revenue_report command");

    let report = lot.report();
    let capacity = lot.capacity();
    ReportResponse {
        total_revenue: report.total_revenue(),
        entries: report.entries(),
        exits: report.exits(),
        started_at: report.started_at(),
        occupied: capacity - lot.available_slots().len() as u32,
        capacity,
    }
}

/// Free slots in ascending order.
pub fn available_slots(lot: &LotState) -> Vec<SlotId> {
    lot.available_slots()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_snapshot() {
        let started = Local.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut lot = LotState::new(10, started);
        lot.allocate_slot();
        lot.allocate_slot();
        lot.record_entry();
        lot.record_entry();
        lot.record_exit(Money::from_cents(15000));

        let report = revenue_report(&lot);
        assert_eq!(report.total_revenue, Money::from_cents(15000));
        assert_eq!(report.entries, 2);
        assert_eq!(report.exits, 1);
        assert_eq!(report.occupied, 2);

        let lines = report.render(&ConfigState::default());
        assert_eq!(lines[0], "Total Revenue Generated: $150.00");
        assert_eq!(lines[1], "Total Vehicle Entries: 2");
        assert_eq!(lines[2], "Total Vehicle Exits: 1");
        assert_eq!(lines[3], "Slots Occupied: 2/10");
        assert_eq!(lines[4], "Session Started: 2026-10-19 08:00:00");
    }

    #[test]
    fn test_available_slots_ascending() {
        let mut lot = LotState::new(3, Local::now());
        lot.allocate_slot();
        let ids: Vec<u32> = available_slots(&lot).iter().map(SlotId::get).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
