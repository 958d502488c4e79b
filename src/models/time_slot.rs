//! Time slot model.

use serde::{Deserialize, Serialize};

/// One teaching period of the day (e.g. "08:30–10:00").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Chronological position within the day.
    pub order: i32,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(id: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            order,
        }
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
