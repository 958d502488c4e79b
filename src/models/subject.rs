//! Subject model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A taught subject and its room requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Acceptable room type ids per class type.
    ///
    /// A class type with no entry here accepts any room type. A class type
    /// mapped to an empty list accepts none.
    pub type_requirements: HashMap<String, Vec<String>>,
    /// Tags every room hosting this subject must carry.
    pub required_tag_ids: Vec<String>,
    /// Classroom this subject prefers for all its sessions, if any.
    pub pinned_classroom_id: Option<String>,
}

impl Subject {
    /// Creates a subject with no room requirements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            type_requirements: HashMap::new(),
            required_tag_ids: Vec::new(),
            pinned_classroom_id: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts a class type to the given room types.
    pub fn with_type_requirement(
        mut self,
        class_type: impl Into<String>,
        room_type_ids: Vec<String>,
    ) -> Self {
        self.type_requirements
            .insert(class_type.into(), room_type_ids);
        self
    }

    /// Adds a tag every hosting room must carry.
    pub fn with_required_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.required_tag_ids.push(tag_id.into());
        self
    }

    /// Pins the subject to a preferred classroom.
    pub fn pinned_to(mut self, classroom_id: impl Into<String>) -> Self {
        self.pinned_classroom_id = Some(classroom_id.into());
        self
    }
}
