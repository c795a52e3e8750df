//! # Domain Types
//!
//! Core domain types used throughout Parkade.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   ┌─────────────────┐   ┌─────────────────┐  │
//! │  │   ParkingRecord      │   │     SlotId      │   │   ClockTime     │  │
//! │  │  ──────────────────  │   │  ─────────────  │   │  ─────────────  │  │
//! │  │  id (SlotId)         │──►│  1-based u32    │   │  hours          │  │
//! │  │  license_plate       │   │  index = id - 1 │   │  minutes        │  │
//! │  │  entry_time          │──────────────────────────►│  "HH:MM"        │  │
//! │  │  exit_time (Option)  │   └─────────────────┘   └─────────────────┘  │
//! │  │  fee (Money)         │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Slot Id Reuse
//! A record's id is the slot it occupies, not a ticket number. Once a vehicle
//! checks out, the next vehicle parked in that slot gets the same id, so the
//! store can hold several closed records with one id but at most one open one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::fee::compute_fee;
use crate::money::Money;

// =============================================================================
// Slot Id
// =============================================================================

/// A 1-based parking slot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(u32);

impl SlotId {
    /// Creates a slot id; `None` for zero.
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(SlotId(id))
        }
    }

    /// Creates a slot id that must fit a lot of `capacity` slots.
    ///
    /// ## Example
    /// ```rust
    /// use parkade_core::SlotId;
    ///
    /// assert!(SlotId::checked(10, 10).is_ok());
    /// assert!(SlotId::checked(11, 10).is_err());
    /// assert!(SlotId::checked(0, 10).is_err());
    /// ```
    pub fn checked(id: u32, capacity: u32) -> CoreResult<Self> {
        match SlotId::new(id) {
            Some(slot) if id <= capacity => Ok(slot),
            _ => Err(CoreError::InvalidSlot { id, capacity }),
        }
    }

    /// Slot id for a zero-based registry index.
    pub const fn from_index(index: usize) -> Self {
        SlotId(index as u32 + 1)
    }

    /// Zero-based registry index.
    #[inline]
    pub const fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// The raw 1-based id.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Clock Time
// =============================================================================

/// Wall-clock time of day as entered by the operator.
///
/// ## No Range Checks
/// Only the shape `H:M` is checked. "25:99" is a valid `ClockTime` and
/// simply converts to 1599 minutes. There is no date component, so stays
/// that cross midnight produce a negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
}

impl ClockTime {
    /// Creates a time from its parts.
    pub const fn new(hours: u32, minutes: u32) -> Self {
        ClockTime { hours, minutes }
    }

    pub const fn hours(&self) -> u32 {
        self.hours
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn total_minutes(&self) -> i64 {
        self.hours as i64 * 60 + self.minutes as i64
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: format!("expected HH:MM, got '{}'", s),
        };

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        let is_number = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_number(hours) || !is_number(minutes) {
            return Err(invalid());
        }

        Ok(ClockTime {
            hours: hours.parse().map_err(|_| invalid())?,
            minutes: minutes.parse().map_err(|_| invalid())?,
        })
    }
}

// =============================================================================
// Parking Record
// =============================================================================

/// One vehicle's stay in the lot.
///
/// ## Lifecycle
/// ```text
/// open(id, plate, entry) ──► check_out(exit) ──► (closed, kept forever)
///   exit_time: None            exit_time: Some
///   fee: 0.00                  fee: compute_fee(entry, exit)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRecord {
    pub id: SlotId,
    pub license_plate: String,
    pub entry_time: ClockTime,
    pub exit_time: Option<ClockTime>,
    pub fee: Money,
}

impl ParkingRecord {
    /// Creates an open record for a vehicle that just entered.
    pub fn open(id: SlotId, license_plate: impl Into<String>, entry_time: ClockTime) -> Self {
        ParkingRecord {
            id,
            license_plate: license_plate.into(),
            entry_time,
            exit_time: None,
            fee: Money::zero(),
        }
    }

    /// True while the vehicle is still parked.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Closes the record: stores the exit time and the fee for the stay.
    ///
    /// Returns the computed fee.
    pub fn check_out(&mut self, exit_time: ClockTime) -> Money {
        let fee = compute_fee(self.entry_time, exit_time);
        self.exit_time = Some(exit_time);
        self.fee = fee;
        fee
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
