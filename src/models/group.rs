//! Student group model.

use serde::{Deserialize, Serialize};

use super::AvailabilityGrid;

/// A student group attending sessions together.
///
/// Several groups can share one session (streamed lectures); the group
/// then counts as occupied in that (day, slot) like any other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of students in the group.
    pub student_count: u32,
    /// Course (study year) the group belongs to.
    pub course: u32,
    /// Per-(day, slot) availability. Undeclared cells are available.
    pub availability: AvailabilityGrid,
    /// Classroom the group prefers for all its sessions, if any.
    pub pinned_classroom_id: Option<String>,
}

impl Group {
    /// Creates a group with the given headcount.
    pub fn new(id: impl Into<String>, student_count: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            student_count,
            course: 1,
            availability: AvailabilityGrid::new(),
            pinned_classroom_id: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course (study year).
    pub fn with_course(mut self, course: u32) -> Self {
        self.course = course;
        self
    }

    /// Sets the availability grid.
    pub fn with_availability(mut self, availability: AvailabilityGrid) -> Self {
        self.availability = availability;
        self
    }

    /// Pins the group to a preferred classroom.
    pub fn pinned_to(mut self, classroom_id: impl Into<String>) -> Self {
        self.pinned_classroom_id = Some(classroom_id.into());
        self
    }
}
