//! Schedule cost function.
//!
//! Scores a complete schedule in one pass. Hard conflicts (double-booked
//! teacher, room, or group, and Forbidden cells) cost [`HARD_CONFLICT`]
//! each so that no accumulation of soft preferences can outweigh one;
//! every other term scales with the config's strictness multiplier.
//!
//! The function is pure: it allocates its own scratch buffers, reads the
//! index without mutating it, and may run concurrently from any number of
//! threads against the same index.

use crate::index::SolverIndex;
use crate::models::{Availability, ScheduleEntry, SolverConfig};

/// Cost of one extra occupant in an already-taken (day, slot), and of a
/// placement on a Forbidden cell.
pub const HARD_CONFLICT: f64 = 10_000.0;
/// Soft penalty for a placement on an Undesirable cell, per entity.
pub const UNDESIRABLE_PENALTY: f64 = 20.0;
/// Soft reward for a placement on a Desirable cell, per entity.
pub const DESIRABLE_REWARD: f64 = 10.0;
/// Soft reward when a placement lands in a pinned classroom.
pub const PIN_MATCH_REWARD: f64 = 100.0;
/// Soft penalty when pins exist but the placement matches none of them.
pub const PIN_MISMATCH_PENALTY: f64 = 50.0;
/// Soft penalty per session past 3 on one teacher-day.
pub const TEACHER_DAILY_OVERLOAD: f64 = 150.0;
/// Soft penalty per session past 3 on one group-day (band below 5).
pub const GROUP_DAILY_OVERLOAD: f64 = 100.0;
/// Soft penalty per session past 4 on one group-day (band from 5 up).
pub const GROUP_DAILY_OVERLOAD_HEAVY: f64 = 200.0;

/// Scores a schedule. Lower is better; a conflict-free schedule on
/// all-Available cells with no pins scores 0, and Desirable rewards can
/// push the total below zero.
///
/// Entries whose day or time slot does not resolve in the index
/// contribute nothing. A teacher, room, or group id that does not resolve
/// skips only the terms that would have used it.
pub fn schedule_cost(
    schedule: &[ScheduleEntry],
    index: &SolverIndex,
    config: &SolverConfig,
) -> f64 {
    let m = config.penalty_multiplier();
    let days = index.day_count();
    let slots = index.slot_count();
    let cells = days * slots;

    let mut cost = 0.0;

    // Occupancy counters, flat: entity * cells + day * slots + slot.
    let mut teacher_usage = vec![0u32; index.teacher_count() * cells];
    let mut group_usage = vec![0u32; index.group_count() * cells];
    let mut room_usage = vec![0u32; index.classroom_count() * cells];
    // Sessions per entity-day, flat: entity * days + day.
    let mut teacher_daily = vec![0u32; index.teacher_count() * days];
    let mut group_daily = vec![0u32; index.group_count() * days];

    for entry in schedule {
        let (Some(&d), Some(&s)) = (
            index.day_idx.get(&entry.day),
            index.slot_idx.get(&entry.time_slot_id),
        ) else {
            continue;
        };
        let offset = d * slots + s;

        let teacher = index.teacher_idx.get(&entry.teacher_id).copied();
        let room = index.classroom_idx.get(&entry.classroom_id).copied();

        // Occupancy: each occupant past the first is a hard conflict.
        if let Some(t) = teacher {
            let usage = &mut teacher_usage[t * cells + offset];
            *usage += 1;
            if *usage > 1 {
                cost += HARD_CONFLICT;
            }
            teacher_daily[t * days + d] += 1;
        }
        if let Some(c) = room {
            let usage = &mut room_usage[c * cells + offset];
            *usage += 1;
            if *usage > 1 {
                cost += HARD_CONFLICT;
            }
        }
        for gid in &entry.group_ids {
            if let Some(&g) = index.group_idx.get(gid) {
                let usage = &mut group_usage[g * cells + offset];
                *usage += 1;
                if *usage > 1 {
                    cost += HARD_CONFLICT;
                }
                group_daily[g * days + d] += 1;
            }
        }

        // Availability preferences.
        if let Some(t) = teacher {
            cost += availability_term(index.teacher_avail.get(t, d, s), m);
        }
        for gid in &entry.group_ids {
            if let Some(&g) = index.group_idx.get(gid) {
                cost += availability_term(index.group_avail.get(g, d, s), m);
            }
        }

        // Pinned classrooms: one term per entry however many pins exist.
        let mut has_pin = false;
        let mut pin_matched = false;
        let mut note_pin = |pin: Option<usize>| {
            if let Some(p) = pin {
                has_pin = true;
                if room == Some(p) {
                    pin_matched = true;
                }
            }
        };
        note_pin(teacher.and_then(|t| index.teacher_pin[t]));
        note_pin(
            index
                .subject_idx
                .get(&entry.subject_id)
                .and_then(|&s| index.subject_pin[s]),
        );
        for gid in &entry.group_ids {
            note_pin(index.group_idx.get(gid).and_then(|&g| index.group_pin[g]));
        }
        if has_pin {
            cost += if pin_matched {
                -PIN_MATCH_REWARD * m
            } else {
                PIN_MISMATCH_PENALTY * m
            };
        }
    }

    if config.settings.enforce_standard_rules {
        for &v in &teacher_daily {
            if v >= 4 {
                cost += f64::from(v - 3) * TEACHER_DAILY_OVERLOAD * m;
            }
        }
        for &v in &group_daily {
            if v >= 5 {
                cost += f64::from(v - 4) * GROUP_DAILY_OVERLOAD_HEAVY * m;
            } else if v >= 4 {
                cost += f64::from(v - 3) * GROUP_DAILY_OVERLOAD * m;
            }
        }
    }

    cost
}

#[inline]
fn availability_term(level: Availability, m: f64) -> f64 {
    match level {
        Availability::Available => 0.0,
        Availability::Desirable => -DESIRABLE_REWARD * m,
        Availability::Undesirable => UNDESIRABLE_PENALTY * m,
        Availability::Forbidden => HARD_CONFLICT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SolverIndex;
    use crate::models::{
        AvailabilityGrid, Classroom, Group, Settings, Subject, Teacher, TimeSlot,
        UnscheduledEntry,
    };

    struct Fixture {
        teachers: Vec<Teacher>,
        groups: Vec<Group>,
        classrooms: Vec<Classroom>,
        subjects: Vec<Subject>,
        time_slots: Vec<TimeSlot>,
        week: Vec<String>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                teachers: vec![Teacher::new("t1"), Teacher::new("t2")],
                groups: vec![Group::new("g1", 20), Group::new("g2", 25)],
                classrooms: vec![
                    Classroom::new("c1", 30, "aud"),
                    Classroom::new("c2", 30, "aud"),
                ],
                subjects: vec![Subject::new("s1"), Subject::new("s2")],
                time_slots: (0..5)
                    .map(|i| TimeSlot::new(format!("ts{}", i + 1), i))
                    .collect(),
                week: [
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                    "Friday",
                    "Saturday",
                ]
                .map(String::from)
                .to_vec(),
            }
        }

        fn index(&self) -> SolverIndex {
            SolverIndex::build(
                &self.teachers,
                &self.groups,
                &self.classrooms,
                &self.subjects,
                &self.time_slots,
                &[],
                &self.week,
            )
        }
    }

    fn entry(uid: &str, teacher: &str, group: &str, slot: &str) -> crate::models::ScheduleEntry {
        let source = UnscheduledEntry::new(uid, "s1", teacher).with_group(group);
        crate::models::ScheduleEntry::placement(&source, "Monday", slot, "c1")
    }

    #[test]
    fn test_empty_schedule_costs_zero() {
        let f = Fixture::new();
        assert_eq!(schedule_cost(&[], &f.index(), &SolverConfig::new(5)), 0.0);
    }

    #[test]
    fn test_clean_placement_costs_zero() {
        let f = Fixture::new();
        let schedule = vec![entry("e1", "t1", "g1", "ts1")];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            0.0
        );
    }

    #[test]
    fn test_teacher_double_booking() {
        let f = Fixture::new();
        // Same teacher, same (day, slot); distinct groups and rooms.
        let mut second = entry("e2", "t1", "g2", "ts1");
        second.classroom_id = "c2".into();
        let schedule = vec![entry("e1", "t1", "g1", "ts1"), second];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            HARD_CONFLICT
        );
    }

    #[test]
    fn test_conflict_cost_is_per_extra_occupant() {
        let f = Fixture::new();
        // Three sessions of one teacher in one slot: two extras.
        let mut e2 = entry("e2", "t1", "g2", "ts1");
        e2.classroom_id = "c2".into();
        let mut e3 = entry("e3", "t1", "g1", "ts2");
        e3.time_slot_id = "ts1".into();
        e3.classroom_id = "missing".into();
        let schedule = vec![entry("e1", "t1", "g1", "ts1"), e2, e3];
        // Extras: teacher ×2, group g1 ×1.
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            3.0 * HARD_CONFLICT
        );
    }

    #[test]
    fn test_room_and_group_double_booking() {
        let f = Fixture::new();
        // Distinct teachers, same room and same group.
        let schedule = vec![entry("e1", "t1", "g1", "ts1"), entry("e2", "t2", "g1", "ts1")];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            2.0 * HARD_CONFLICT
        );
    }

    #[test]
    fn test_availability_terms() {
        let mut f = Fixture::new();
        f.teachers[0] = Teacher::new("t1").with_availability(
            AvailabilityGrid::new()
                .with_cell("Monday", "ts1", Availability::Undesirable)
                .with_cell("Monday", "ts2", Availability::Desirable)
                .with_cell("Monday", "ts3", Availability::Forbidden),
        );
        let index = f.index();
        let config = SolverConfig::new(5);

        assert_eq!(
            schedule_cost(&[entry("e1", "t1", "g1", "ts1")], &index, &config),
            UNDESIRABLE_PENALTY
        );
        assert_eq!(
            schedule_cost(&[entry("e1", "t1", "g1", "ts2")], &index, &config),
            -DESIRABLE_REWARD
        );
        assert_eq!(
            schedule_cost(&[entry("e1", "t1", "g1", "ts3")], &index, &config),
            HARD_CONFLICT
        );
    }

    #[test]
    fn test_group_availability_counts_per_group() {
        let mut f = Fixture::new();
        for g in &mut f.groups {
            g.availability =
                AvailabilityGrid::new().with_cell("Monday", "ts1", Availability::Undesirable);
        }
        let source = UnscheduledEntry::new("e1", "s1", "t1")
            .with_group("g1")
            .with_group("g2");
        let placed = crate::models::ScheduleEntry::placement(&source, "Monday", "ts1", "c1");
        assert_eq!(
            schedule_cost(&[placed], &f.index(), &SolverConfig::new(5)),
            2.0 * UNDESIRABLE_PENALTY
        );
    }

    #[test]
    fn test_pin_reward_applied_once_per_entry() {
        let mut f = Fixture::new();
        // Teacher, subject, and group all pinned to c1.
        f.teachers[0] = Teacher::new("t1").pinned_to("c1");
        f.subjects[0] = Subject::new("s1").pinned_to("c1");
        f.groups[0] = Group::new("g1", 20).pinned_to("c1");
        let schedule = vec![entry("e1", "t1", "g1", "ts1")];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            -PIN_MATCH_REWARD
        );
    }

    #[test]
    fn test_pin_mismatch_penalty() {
        let mut f = Fixture::new();
        f.subjects[0] = Subject::new("s1").pinned_to("c2");
        // Placement lands in c1.
        let schedule = vec![entry("e1", "t1", "g1", "ts1")];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            PIN_MISMATCH_PENALTY
        );
    }

    #[test]
    fn test_any_matching_pin_wins() {
        let mut f = Fixture::new();
        // Conflicting pins: the matching one decides the term.
        f.teachers[0] = Teacher::new("t1").pinned_to("c2");
        f.subjects[0] = Subject::new("s1").pinned_to("c1");
        let schedule = vec![entry("e1", "t1", "g1", "ts1")];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            -PIN_MATCH_REWARD
        );
    }

    #[test]
    fn test_pin_never_matches_unknown_room() {
        let mut f = Fixture::new();
        f.subjects[0] = Subject::new("s1").pinned_to("c1");
        let mut placed = entry("e1", "t1", "g1", "ts1");
        placed.classroom_id = "missing".into();
        assert_eq!(
            schedule_cost(&[placed], &f.index(), &SolverConfig::new(5)),
            PIN_MISMATCH_PENALTY
        );
    }

    #[test]
    fn test_unresolved_day_or_slot_skips_entry() {
        let f = Fixture::new();
        let mut bad_day = entry("e1", "t1", "g1", "ts1");
        bad_day.day = "Someday".into();
        let mut bad_slot = entry("e2", "t1", "g1", "ts1");
        bad_slot.time_slot_id = "ts99".into();
        assert_eq!(
            schedule_cost(&[bad_day, bad_slot], &f.index(), &SolverConfig::new(5)),
            0.0
        );
    }

    #[test]
    fn test_daily_load_bands() {
        let f = Fixture::new();
        let config = SolverConfig::new(5)
            .with_settings(Settings {
                enforce_standard_rules: true,
                ..Settings::default()
            });

        // Five sessions of one teacher and one group on one day,
        // all in distinct slots and alternating rooms: no conflicts.
        let schedule: Vec<_> = (0..5)
            .map(|i| {
                let source = UnscheduledEntry::new(format!("e{i}"), "s1", "t1").with_group("g1");
                crate::models::ScheduleEntry::placement(
                    &source,
                    "Monday",
                    format!("ts{}", i + 1),
                    if i % 2 == 0 { "c1" } else { "c2" },
                )
            })
            .collect();

        // Teacher day of 5: (5-3)·150. Group day of 5: (5-4)·200.
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &config),
            2.0 * TEACHER_DAILY_OVERLOAD + GROUP_DAILY_OVERLOAD_HEAVY
        );

        // Four sessions: (4-3)·150 for the teacher, (4-3)·100 for the group.
        assert_eq!(
            schedule_cost(&schedule[..4], &f.index(), &config),
            TEACHER_DAILY_OVERLOAD + GROUP_DAILY_OVERLOAD
        );

        // Three sessions: under every band.
        assert_eq!(schedule_cost(&schedule[..3], &f.index(), &config), 0.0);

        // Same schedules without the flag: nothing.
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(5)),
            0.0
        );
    }

    #[test]
    fn test_soft_terms_scale_linearly_with_strictness() {
        let mut f = Fixture::new();
        f.teachers[0] = Teacher::new("t1")
            .with_availability(
                AvailabilityGrid::new().with_cell("Monday", "ts1", Availability::Undesirable),
            )
            .pinned_to("c2");
        let index = f.index();
        let schedule = vec![entry("e1", "t1", "g1", "ts1")];

        let at5 = schedule_cost(&schedule, &index, &SolverConfig::new(5));
        let at10 = schedule_cost(&schedule, &index, &SolverConfig::new(10));
        assert_eq!(at5, UNDESIRABLE_PENALTY + PIN_MISMATCH_PENALTY);
        assert_eq!(at10, 2.0 * at5);

        // Strictness 0 silences soft terms entirely.
        assert_eq!(schedule_cost(&schedule, &index, &SolverConfig::new(0)), 0.0);
    }

    #[test]
    fn test_hard_terms_ignore_strictness() {
        let f = Fixture::new();
        let mut second = entry("e2", "t1", "g2", "ts1");
        second.classroom_id = "c2".into();
        let schedule = vec![entry("e1", "t1", "g1", "ts1"), second];
        assert_eq!(
            schedule_cost(&schedule, &f.index(), &SolverConfig::new(0)),
            HARD_CONFLICT
        );
    }
}
