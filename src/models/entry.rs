//! Session entries: the unscheduled pool and placed schedule entries.

use serde::{Deserialize, Serialize};

/// A class session waiting to be placed.
///
/// Produced upstream from educational plans; the solver only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnscheduledEntry {
    /// Unique entry identifier.
    pub uid: String,
    /// Subject taught in this session.
    pub subject_id: String,
    /// Teacher holding the session.
    pub teacher_id: String,
    /// Groups attending (at least one; several for streamed lectures).
    pub group_ids: Vec<String>,
    /// Class type (lecture, seminar, lab, ...). Selects among the
    /// subject's per-type room requirements.
    pub class_type: String,
    /// Total headcount across the attending groups.
    pub student_count: u32,
}

impl UnscheduledEntry {
    /// Creates an entry for one teacher and subject.
    pub fn new(
        uid: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            group_ids: Vec::new(),
            class_type: String::new(),
            student_count: 0,
        }
    }

    /// Adds an attending group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_ids.push(group_id.into());
        self
    }

    /// Sets the class type.
    pub fn with_class_type(mut self, class_type: impl Into<String>) -> Self {
        self.class_type = class_type.into();
        self
    }

    /// Sets the headcount.
    pub fn with_students(mut self, student_count: u32) -> Self {
        self.student_count = student_count;
        self
    }
}

/// A session placed at a concrete (day, time slot, classroom).
///
/// Everything except `day`, `time_slot_id`, and `classroom_id` is copied
/// verbatim from the source [`UnscheduledEntry`] and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Generated identifier (`"sched-" + uid`).
    pub id: String,
    /// Day name from the solver's week list.
    pub day: String,
    /// Assigned time slot.
    pub time_slot_id: String,
    /// Assigned classroom.
    pub classroom_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Teacher holding the session.
    pub teacher_id: String,
    /// Attending groups.
    pub group_ids: Vec<String>,
    /// Class type.
    pub class_type: String,
    /// Uid of the source entry.
    pub unscheduled_uid: String,
}

impl ScheduleEntry {
    /// Places a source entry at a concrete (day, slot, classroom).
    pub fn placement(
        source: &UnscheduledEntry,
        day: impl Into<String>,
        time_slot_id: impl Into<String>,
        classroom_id: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("sched-{}", source.uid),
            day: day.into(),
            time_slot_id: time_slot_id.into(),
            classroom_id: classroom_id.into(),
            subject_id: source.subject_id.clone(),
            teacher_id: source.teacher_id.clone(),
            group_ids: source.group_ids.clone(),
            class_type: source.class_type.clone(),
            unscheduled_uid: source.uid.clone(),
        }
    }

    /// Whether any attending group is shared with `other`.
    pub fn shares_group(&self, other: &[String]) -> bool {
        self.group_ids.iter().any(|g| other.contains(g))
    }
}
