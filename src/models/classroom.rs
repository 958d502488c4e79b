//! Classroom model.

use serde::{Deserialize, Serialize};

/// A room sessions can be placed in.
///
/// Suitability for a concrete session is decided by capacity, room type,
/// and tags (e.g. "projector", "chemistry-bench").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name (room number).
    pub name: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Room type identifier (e.g. lecture hall, computer lab).
    pub type_id: String,
    /// Equipment / feature tags attached to the room.
    pub tag_ids: Vec<String>,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: impl Into<String>, capacity: u32, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            type_id: type_id.into(),
            tag_ids: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a feature tag.
    pub fn with_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_ids.push(tag_id.into());
        self
    }
}
