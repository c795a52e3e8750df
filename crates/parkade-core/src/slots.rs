//! # Slot Registry
//!
//! In-memory occupancy flags for the lot's fixed set of slots.
//!
//! ```text
//! index:  0     1     2     3    ...   capacity-1
//! id:     1     2     3     4    ...   capacity
//!       ┌─────┬─────┬─────┬─────┬─────┬─────┐
//!       │ occ │free │ occ │free │ ... │free │
//!       └─────┴─────┴─────┴─────┴─────┴─────┘
//!              ▲
//!              └── allocate() takes the lowest free slot
//! ```
//!
//! The registry is not persisted. The console rebuilds it from the record
//! store's open records on startup; after that every operation keeps it in
//! step with the store.

use crate::types::SlotId;

/// Occupancy flags, one per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRegistry {
    occupied: Vec<bool>,
}

impl SlotRegistry {
    /// Creates a registry with every slot available.
    pub fn new(capacity: u32) -> Self {
        SlotRegistry {
            occupied: vec![false; capacity as usize],
        }
    }

    /// Number of slots in the lot.
    pub fn capacity(&self) -> u32 {
        self.occupied.len() as u32
    }

    /// Marks the lowest available slot occupied and returns it.
    ///
    /// Returns `None` when the lot is full.
    pub fn allocate(&mut self) -> Option<SlotId> {
        let index = self.occupied.iter().position(|taken| !taken)?;
        self.occupied[index] = true;
        Some(SlotId::from_index(index))
    }

    /// Marks a specific slot occupied.
    ///
    /// Returns `false` if the slot was already occupied or is out of range.
    pub fn occupy(&mut self, slot: SlotId) -> bool {
        match self.occupied.get_mut(slot.index()) {
            Some(taken) if !*taken => {
                *taken = true;
                true
            }
            _ => false,
        }
    }

    /// Marks a slot available again.
    ///
    /// Idempotent: releasing a free slot is a no-op. Out-of-range ids are
    /// ignored. Returns whether the slot was occupied before the call.
    pub fn release(&mut self, slot: SlotId) -> bool {
        match self.occupied.get_mut(slot.index()) {
            Some(taken) => std::mem::replace(taken, false),
            None => false,
        }
    }

    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.occupied.get(slot.index()).copied().unwrap_or(false)
    }

    /// Available slot ids in ascending order.
    pub fn available(&self) -> Vec<SlotId> {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(index, _)| SlotId::from_index(index))
            .collect()
    }

    pub fn occupied_count(&self) -> u32 {
        self.occupied.iter().filter(|taken| **taken).count() as u32
    }

    pub fn is_full(&self) -> bool {
        self.occupied.iter().all(|taken| *taken)
    }
}
