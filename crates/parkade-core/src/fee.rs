//! # Fee Calculation
//!
//! Hourly parking fees with partial hours rounded up.
//!
//! ```text
//! entry 10:00, exit 11:01
//!      │
//!      ▼
//! duration = 661 - 600 = 61 min
//!      │
//!      ▼
//! hours = ceil(61 / 60) = 2 ──► fee = 2 × HOURLY_RATE = $100.00
//! ```
//!
//! Zero and negative durations (including stays past midnight, which have
//! no date to disambiguate them) bill nothing.

use crate::money::Money;
use crate::types::ClockTime;
use crate::HOURLY_RATE;

/// Number of started hours between two times; zero when exit is not after entry.
pub fn billable_hours(entry: ClockTime, exit: ClockTime) -> i64 {
    let duration = exit.total_minutes() - entry.total_minutes();
    if duration <= 0 {
        return 0;
    }
    (duration + 59) / 60
}

/// Fee for a stay from `entry` to `exit` at [`HOURLY_RATE`].
pub fn compute_fee(entry: ClockTime, exit: ClockTime) -> Money {
    let hours = billable_hours(entry, exit);
    if hours > 0 {
        HOURLY_RATE * hours
    } else {
        Money::zero()
    }
}
