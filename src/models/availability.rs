//! Availability levels and grids.
//!
//! Teachers and student groups declare how willing they are to hold class
//! in each (day, time slot) cell. A cell that is never mentioned counts as
//! fully available.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Willingness of an entity to hold class in a given (day, time slot) cell.
///
/// `Desirable` is rewarded and `Undesirable` penalized by the cost
/// function; `Forbidden` carries the same weight as a hard conflict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// No preference either way.
    #[default]
    Available,
    /// Preferred cell (rewarded).
    Desirable,
    /// Tolerated but penalized cell.
    Undesirable,
    /// The entity cannot attend at all.
    Forbidden,
}

/// Sparse per-entity availability: day name → time slot id → level.
///
/// Missing days and missing slots both read as [`Availability::Available`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityGrid {
    /// Declared cells. Day name → (time slot id → level).
    pub grid: HashMap<String, HashMap<String, Availability>>,
}

impl AvailabilityGrid {
    /// Creates an empty grid (everything available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level for one cell, replacing any previous value.
    pub fn set(
        &mut self,
        day: impl Into<String>,
        slot_id: impl Into<String>,
        level: Availability,
    ) {
        self.grid
            .entry(day.into())
            .or_default()
            .insert(slot_id.into(), level);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_cell(
        mut self,
        day: impl Into<String>,
        slot_id: impl Into<String>,
        level: Availability,
    ) -> Self {
        self.set(day, slot_id, level);
        self
    }

    /// Level for a cell. Undeclared cells are `Available`.
    pub fn level(&self, day: &str, slot_id: &str) -> Availability {
        self.grid
            .get(day)
            .and_then(|slots| slots.get(slot_id))
            .copied()
            .unwrap_or_default()
    }
}
