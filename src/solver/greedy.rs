//! Greedy seed construction.
//!
//! Places the hardest entries first (largest headcount) into the cheapest
//! conflict-free (day, slot, room) still open, considering only the
//! precomputed suitable rooms and the teacher's availability. The result
//! is conflict-free but indifferent to most preferences; the annealing
//! phase refines it.

use log::info;

use crate::index::SolverIndex;
use crate::models::{Availability, Classroom, ScheduleEntry, TimeSlot, UnscheduledEntry};

/// Builds the initial schedule.
///
/// Entries with no suitable room, or whose teacher has no non-Forbidden
/// cell left, are dropped silently.
pub(crate) fn greedy_seed(
    entries: &[UnscheduledEntry],
    index: &SolverIndex,
    week_days: &[String],
    time_slots: &[TimeSlot],
    classrooms: &[Classroom],
) -> Vec<ScheduleEntry> {
    // Largest sessions first; stable, so equal headcounts keep input order.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[b].student_count.cmp(&entries[a].student_count));

    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(entries.len());

    for entry_pos in order {
        let entry = &entries[entry_pos];
        let rooms = &index.suitable_rooms[entry_pos];
        if rooms.is_empty() {
            continue;
        }
        let teacher = index.teacher_idx.get(&entry.teacher_id).copied();

        let mut best: Option<(usize, usize, usize)> = None;
        let mut best_cost = f64::MAX;

        for d in 0..week_days.len() {
            for s in 0..time_slots.len() {
                if let Some(t) = teacher {
                    if index.teacher_avail.get(t, d, s) == Availability::Forbidden {
                        continue;
                    }
                }

                for &c in rooms {
                    if collides(&schedule, entry, &week_days[d], &time_slots[s].id, &classrooms[c].id)
                    {
                        continue;
                    }

                    let mut local_cost = 0.0;
                    if let Some(t) = teacher {
                        if index.teacher_avail.get(t, d, s) == Availability::Undesirable {
                            local_cost += 20.0;
                        }
                    }

                    if local_cost < best_cost {
                        best_cost = local_cost;
                        best = Some((d, s, c));
                    }
                }
            }
        }

        if let Some((d, s, c)) = best {
            schedule.push(ScheduleEntry::placement(
                entry,
                week_days[d].clone(),
                time_slots[s].id.clone(),
                classrooms[c].id.clone(),
            ));
        }
    }

    info!(
        "greedy seed placed {} of {} entries",
        schedule.len(),
        entries.len()
    );
    schedule
}

/// Whether placing `entry` at (day, slot, room) would double-book a
/// teacher, the room, or any attending group against the schedule so far.
fn collides(
    schedule: &[ScheduleEntry],
    entry: &UnscheduledEntry,
    day: &str,
    slot_id: &str,
    classroom_id: &str,
) -> bool {
    schedule.iter().any(|placed| {
        placed.day == day
            && placed.time_slot_id == slot_id
            && (placed.teacher_id == entry.teacher_id
                || placed.classroom_id == classroom_id
                || placed.shares_group(&entry.group_ids))
    })
}
