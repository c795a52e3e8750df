//! Read-only record listing.

use tracing::debug;

use parkade_core::ParkingRecord;
use parkade_store::RecordStore;

use crate::error::AppResult;
use crate::state::ConfigState;

/// Shown in place of a missing exit time.
pub const NOT_EXITED: &str = "Not Exited";

/// Every record in file order, open and closed.
pub fn list_records(store: &RecordStore) -> AppResult<Vec<ParkingRecord>> {
    debug!("list_records command");
    Ok(store.list_all()?)
}

/// One listing line for a record.
pub fn render_record(record: &ParkingRecord, config: &ConfigState) -> String {
    let exit_time = record
        .exit_time
        .map(|t| t.to_string())
        .unwrap_or_else(|| NOT_EXITED.to_string());

    format!(
        "ID: {} | License Plate: {} | Entry Time: {} | Exit Time: {} | Fee: {}",
        record.id,
        record.license_plate,
        record.entry_time,
        exit_time,
        config.format_currency(record.fee)
    )
}
