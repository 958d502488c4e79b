//! Teacher model.

use serde::{Deserialize, Serialize};

use super::AvailabilityGrid;

/// A teacher who must be present at every session assigned to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Per-(day, slot) availability. Undeclared cells are available.
    pub availability: AvailabilityGrid,
    /// Classroom this teacher prefers to hold all sessions in, if any.
    pub pinned_classroom_id: Option<String>,
}

impl Teacher {
    /// Creates a teacher with an empty availability grid.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: AvailabilityGrid::new(),
            pinned_classroom_id: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the availability grid.
    pub fn with_availability(mut self, availability: AvailabilityGrid) -> Self {
        self.availability = availability;
        self
    }

    /// Pins the teacher to a preferred classroom.
    pub fn pinned_to(mut self, classroom_id: impl Into<String>) -> Self {
        self.pinned_classroom_id = Some(classroom_id.into());
        self
    }
}
