//! Dense constraint index.
//!
//! Input entities reference each other through string ids and keep their
//! availability as sparse nested maps. Scoring a candidate schedule touches
//! every entry's teacher, groups, and room, so those lookups have to be
//! cheap: this module flattens everything once into zero-based handles,
//! contiguous availability cubes, pin arrays, and per-entry suitable-room
//! lists. Built during `load`, read-only afterwards.
//!
//! Unknown ids never fail the build; the element that carries them is
//! simply left out of the derived table.

use std::collections::HashMap;

use crate::models::{
    Availability, AvailabilityGrid, Classroom, Group, Subject, Teacher, TimeSlot,
    UnscheduledEntry,
};

/// Per-entity availability stored as one contiguous buffer.
///
/// Cell `(entity, day, slot)` lives at
/// `entity * days * slots + day * slots + slot`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityCube {
    data: Vec<Availability>,
    days: usize,
    slots: usize,
}

impl AvailabilityCube {
    fn build(grids: &[&AvailabilityGrid], days: &[String], slots: &[TimeSlot]) -> Self {
        let mut cube = Self {
            data: vec![Availability::Available; grids.len() * days.len() * slots.len()],
            days: days.len(),
            slots: slots.len(),
        };
        for (e, grid) in grids.iter().enumerate() {
            for (d, day) in days.iter().enumerate() {
                let Some(declared) = grid.grid.get(day) else {
                    continue;
                };
                for (s, slot) in slots.iter().enumerate() {
                    if let Some(&level) = declared.get(&slot.id) {
                        cube.data[e * cube.days * cube.slots + d * cube.slots + s] = level;
                    }
                }
            }
        }
        cube
    }

    /// Availability of `entity` at `(day, slot)`.
    #[inline]
    pub fn get(&self, entity: usize, day: usize, slot: usize) -> Availability {
        self.data[entity * self.days * self.slots + day * self.slots + slot]
    }
}

/// Id-to-handle mappings and precomputed lookup tables for one solve.
///
/// Handles are positions in the input vectors passed to
/// [`build`](SolverIndex::build); the index never stores entity objects
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverIndex {
    /// Teacher id → handle.
    pub teacher_idx: HashMap<String, usize>,
    /// Group id → handle.
    pub group_idx: HashMap<String, usize>,
    /// Classroom id → handle.
    pub classroom_idx: HashMap<String, usize>,
    /// Subject id → handle.
    pub subject_idx: HashMap<String, usize>,
    /// Time slot id → handle.
    pub slot_idx: HashMap<String, usize>,
    /// Day name → handle.
    pub day_idx: HashMap<String, usize>,
    /// Teacher availability cube.
    pub teacher_avail: AvailabilityCube,
    /// Group availability cube.
    pub group_avail: AvailabilityCube,
    /// Preferred classroom handle per teacher.
    pub teacher_pin: Vec<Option<usize>>,
    /// Preferred classroom handle per group.
    pub group_pin: Vec<Option<usize>>,
    /// Preferred classroom handle per subject.
    pub subject_pin: Vec<Option<usize>>,
    /// Feasible classroom handles per entry, in classroom order. Indexed
    /// by the entry's position in the input slice.
    pub suitable_rooms: Vec<Vec<usize>>,

    day_count: usize,
    slot_count: usize,
    teacher_count: usize,
    group_count: usize,
    classroom_count: usize,
}

impl SolverIndex {
    /// Builds the index from fully-parsed input.
    ///
    /// Pure: no input is mutated, and malformed references (a pin to a
    /// room that does not exist, an entry whose subject is unknown) are
    /// tolerated by omission.
    pub fn build(
        teachers: &[Teacher],
        groups: &[Group],
        classrooms: &[Classroom],
        subjects: &[Subject],
        time_slots: &[TimeSlot],
        entries: &[UnscheduledEntry],
        week_days: &[String],
    ) -> Self {
        let teacher_idx = id_map(teachers.iter().map(|t| t.id.as_str()));
        let group_idx = id_map(groups.iter().map(|g| g.id.as_str()));
        let classroom_idx = id_map(classrooms.iter().map(|c| c.id.as_str()));
        let subject_idx = id_map(subjects.iter().map(|s| s.id.as_str()));
        let slot_idx = id_map(time_slots.iter().map(|ts| ts.id.as_str()));
        let day_idx = id_map(week_days.iter().map(|d| d.as_str()));

        let teacher_grids: Vec<&AvailabilityGrid> =
            teachers.iter().map(|t| &t.availability).collect();
        let group_grids: Vec<&AvailabilityGrid> = groups.iter().map(|g| &g.availability).collect();
        let teacher_avail = AvailabilityCube::build(&teacher_grids, week_days, time_slots);
        let group_avail = AvailabilityCube::build(&group_grids, week_days, time_slots);

        let teacher_pin = teachers
            .iter()
            .map(|t| resolve_pin(&t.pinned_classroom_id, &classroom_idx))
            .collect();
        let group_pin = groups
            .iter()
            .map(|g| resolve_pin(&g.pinned_classroom_id, &classroom_idx))
            .collect();
        let subject_pin = subjects
            .iter()
            .map(|s| resolve_pin(&s.pinned_classroom_id, &classroom_idx))
            .collect();

        let suitable_rooms = entries
            .iter()
            .map(|e| suitable_rooms_for(e, subjects, &subject_idx, classrooms))
            .collect();

        Self {
            teacher_idx,
            group_idx,
            classroom_idx,
            subject_idx,
            slot_idx,
            day_idx,
            teacher_avail,
            group_avail,
            teacher_pin,
            group_pin,
            subject_pin,
            suitable_rooms,
            day_count: week_days.len(),
            slot_count: time_slots.len(),
            teacher_count: teachers.len(),
            group_count: groups.len(),
            classroom_count: classrooms.len(),
        }
    }

    /// Number of week days.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Number of time slots.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Number of teachers.
    #[inline]
    pub fn teacher_count(&self) -> usize {
        self.teacher_count
    }

    /// Number of groups.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Number of classrooms.
    #[inline]
    pub fn classroom_count(&self) -> usize {
        self.classroom_count
    }
}

fn id_map<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id.to_string(), i)).collect()
}

fn resolve_pin(pin: &Option<String>, classroom_idx: &HashMap<String, usize>) -> Option<usize> {
    pin.as_ref().and_then(|id| classroom_idx.get(id)).copied()
}

/// Classrooms feasible for an entry: enough seats, an acceptable room
/// type for the entry's class type, and every tag the subject requires.
///
/// An unresolvable subject yields no rooms at all, which later drops the
/// entry from the greedy seed.
fn suitable_rooms_for(
    entry: &UnscheduledEntry,
    subjects: &[Subject],
    subject_idx: &HashMap<String, usize>,
    classrooms: &[Classroom],
) -> Vec<usize> {
    let Some(subject) = subject_idx.get(&entry.subject_id).map(|&i| &subjects[i]) else {
        return Vec::new();
    };

    classrooms
        .iter()
        .enumerate()
        .filter(|(_, room)| {
            if room.capacity < entry.student_count {
                return false;
            }
            if let Some(acceptable) = subject.type_requirements.get(&entry.class_type) {
                if !acceptable.contains(&room.type_id) {
                    return false;
                }
            }
            subject
                .required_tag_ids
                .iter()
                .all(|tag| room.tag_ids.contains(tag))
        })
        .map(|(i, _)| i)
        .collect()
}
