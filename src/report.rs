//! Post-solve feasibility report.
//!
//! The solver returns the best schedule it discovered, which is not
//! guaranteed to be conflict-free. Callers that need feasibility inspect
//! the result through this report: double-bookings per entity kind,
//! placements on Forbidden cells, and the input entries that never made
//! it into the schedule.

use std::collections::HashMap;

use serde::Serialize;

use crate::index::SolverIndex;
use crate::models::{Availability, ScheduleEntry, UnscheduledEntry};

/// Feasibility summary of one schedule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleReport {
    /// Teacher double-bookings: occupants past the first, summed over
    /// all (teacher, day, slot) cells.
    pub teacher_clashes: u32,
    /// Classroom double-bookings, counted the same way.
    pub classroom_clashes: u32,
    /// Group double-bookings, counted the same way.
    pub group_clashes: u32,
    /// Schedule entries whose teacher or any group is Forbidden at the
    /// assigned cell.
    pub forbidden_placements: u32,
    /// Uids of input entries with no counterpart in the schedule.
    pub unplaced_uids: Vec<String>,
}

impl ScheduleReport {
    /// Builds the report for a schedule against its input entries.
    ///
    /// Entries whose day or time slot does not resolve are ignored, the
    /// same way the cost function ignores them.
    pub fn calculate(
        schedule: &[ScheduleEntry],
        entries: &[UnscheduledEntry],
        index: &SolverIndex,
    ) -> Self {
        let mut report = Self::default();
        let mut teacher_cells: HashMap<(usize, usize, usize), u32> = HashMap::new();
        let mut room_cells: HashMap<(usize, usize, usize), u32> = HashMap::new();
        let mut group_cells: HashMap<(usize, usize, usize), u32> = HashMap::new();

        for entry in schedule {
            let (Some(&d), Some(&s)) = (
                index.day_idx.get(&entry.day),
                index.slot_idx.get(&entry.time_slot_id),
            ) else {
                continue;
            };

            let mut forbidden = false;

            if let Some(&t) = index.teacher_idx.get(&entry.teacher_id) {
                let seen = teacher_cells.entry((t, d, s)).or_insert(0);
                *seen += 1;
                if *seen > 1 {
                    report.teacher_clashes += 1;
                }
                forbidden |= index.teacher_avail.get(t, d, s) == Availability::Forbidden;
            }
            if let Some(&c) = index.classroom_idx.get(&entry.classroom_id) {
                let seen = room_cells.entry((c, d, s)).or_insert(0);
                *seen += 1;
                if *seen > 1 {
                    report.classroom_clashes += 1;
                }
            }
            for gid in &entry.group_ids {
                if let Some(&g) = index.group_idx.get(gid) {
                    let seen = group_cells.entry((g, d, s)).or_insert(0);
                    *seen += 1;
                    if *seen > 1 {
                        report.group_clashes += 1;
                    }
                    forbidden |= index.group_avail.get(g, d, s) == Availability::Forbidden;
                }
            }

            if forbidden {
                report.forbidden_placements += 1;
            }
        }

        let placed: Vec<&str> = schedule.iter().map(|e| e.unscheduled_uid.as_str()).collect();
        report.unplaced_uids = entries
            .iter()
            .filter(|e| !placed.contains(&e.uid.as_str()))
            .map(|e| e.uid.clone())
            .collect();

        report
    }

    /// Total double-bookings across all entity kinds.
    pub fn total_clashes(&self) -> u32 {
        self.teacher_clashes + self.classroom_clashes + self.group_clashes
    }

    /// Whether the schedule has no double-bookings and no Forbidden
    /// placements. Unplaced entries do not count against feasibility.
    pub fn is_conflict_free(&self) -> bool {
        self.total_clashes() == 0 && self.forbidden_placements == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AvailabilityGrid, Classroom, Group, Subject, Teacher, TimeSlot,
    };

    fn world_index(teachers: &[Teacher], groups: &[Group]) -> SolverIndex {
        SolverIndex::build(
            teachers,
            groups,
            &[Classroom::new("c1", 30, "aud"), Classroom::new("c2", 30, "aud")],
            &[Subject::new("s1")],
            &[TimeSlot::new("ts1", 0), TimeSlot::new("ts2", 1)],
            &[],
            &["Monday".to_string(), "Tuesday".to_string()],
        )
    }

    fn placed(uid: &str, teacher: &str, group: &str, slot: &str, room: &str) -> ScheduleEntry {
        let source = UnscheduledEntry::new(uid, "s1", teacher).with_group(group);
        ScheduleEntry::placement(&source, "Monday", slot, room)
    }

    #[test]
    fn test_clean_schedule_is_conflict_free() {
        let index = world_index(&[Teacher::new("t1")], &[Group::new("g1", 10)]);
        let schedule = vec![placed("e1", "t1", "g1", "ts1", "c1")];
        let entries = vec![UnscheduledEntry::new("e1", "s1", "t1").with_group("g1")];

        let report = ScheduleReport::calculate(&schedule, &entries, &index);
        assert!(report.is_conflict_free());
        assert!(report.unplaced_uids.is_empty());
    }

    #[test]
    fn test_counts_each_clash_kind() {
        let index = world_index(
            &[Teacher::new("t1"), Teacher::new("t2")],
            &[Group::new("g1", 10), Group::new("g2", 10)],
        );
        let schedule = vec![
            placed("e1", "t1", "g1", "ts1", "c1"),
            // Same teacher and room, different group.
            placed("e2", "t1", "g2", "ts1", "c1"),
            // Same group as e1, own teacher and room.
            placed("e3", "t2", "g1", "ts1", "c2"),
        ];

        let report = ScheduleReport::calculate(&schedule, &[], &index);
        assert_eq!(report.teacher_clashes, 1);
        assert_eq!(report.classroom_clashes, 1);
        assert_eq!(report.group_clashes, 1);
        assert_eq!(report.total_clashes(), 3);
        assert!(!report.is_conflict_free());
    }

    #[test]
    fn test_flags_forbidden_placements() {
        let teacher = Teacher::new("t1").with_availability(
            AvailabilityGrid::new().with_cell("Monday", "ts1", Availability::Forbidden),
        );
        let index = world_index(&[teacher], &[Group::new("g1", 10)]);
        let schedule = vec![placed("e1", "t1", "g1", "ts1", "c1")];

        let report = ScheduleReport::calculate(&schedule, &[], &index);
        assert_eq!(report.forbidden_placements, 1);
        assert!(!report.is_conflict_free());
    }

    #[test]
    fn test_lists_unplaced_entries() {
        let index = world_index(&[Teacher::new("t1")], &[Group::new("g1", 10)]);
        let schedule = vec![placed("e1", "t1", "g1", "ts1", "c1")];
        let entries = vec![
            UnscheduledEntry::new("e1", "s1", "t1").with_group("g1"),
            UnscheduledEntry::new("e2", "s1", "t1").with_group("g1"),
        ];

        let report = ScheduleReport::calculate(&schedule, &entries, &index);
        assert_eq!(report.unplaced_uids, vec!["e2"]);
        // Being unplaced is reported but not a conflict.
        assert!(report.is_conflict_free());
    }

    #[test]
    fn test_unresolvable_cells_are_ignored() {
        let index = world_index(&[Teacher::new("t1")], &[Group::new("g1", 10)]);
        let mut odd = placed("e1", "t1", "g1", "ts1", "c1");
        odd.day = "Someday".into();
        let report = ScheduleReport::calculate(&[odd], &[], &index);
        assert!(report.is_conflict_free());
    }
}
