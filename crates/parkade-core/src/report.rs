//! # Revenue Report
//!
//! Session counters updated as operations commit.
//!
//! | Operation       | entries | exits | total_revenue |
//! |-----------------|---------|-------|---------------|
//! | add (success)   | +1      |       |               |
//! | checkout        |         | +1    | +fee          |
//! | delete          |         |       |               |
//!
//! The counters live for one process only and are not rebuilt from the
//! record file.

use chrono::{DateTime, Local};

use crate::money::Money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueReport {
    total_revenue: Money,
    entries: u32,
    exits: u32,
    started_at: DateTime<Local>,
}

impl RevenueReport {
    /// Creates empty counters for a session that began at `started_at`.
    pub fn new(started_at: DateTime<Local>) -> Self {
        RevenueReport {
            total_revenue: Money::zero(),
            entries: 0,
            exits: 0,
            started_at,
        }
    }

    /// A vehicle was added.
    pub fn record_entry(&mut self) {
        self.entries += 1;
    }

    /// A vehicle checked out and paid `fee`.
    pub fn record_exit(&mut self, fee: Money) {
        self.exits += 1;
        self.total_revenue += fee;
    }

    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    pub fn entries(&self) -> u32 {
        self.entries
    }

    pub fn exits(&self) -> u32 {
        self.exits
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}
