//! Two-phase timetable solver.
//!
//! Phase 1 builds a conflict-free seed greedily; phase 2 refines it with
//! parallel simulated annealing and returns the cheapest schedule any
//! chain found. Load once, then solve; `load` replaces all prior state.
//!
//! ```
//! use timetable_solver::models::{
//!     Classroom, Group, SolverConfig, Subject, Teacher, TimeSlot, UnscheduledEntry,
//! };
//! use timetable_solver::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.load(
//!     vec![Teacher::new("t1")],
//!     vec![Group::new("g1", 20)],
//!     vec![Classroom::new("c1", 30, "aud")],
//!     vec![Subject::new("s1")],
//!     vec![TimeSlot::new("ts1", 0)],
//!     vec![UnscheduledEntry::new("e1", "s1", "t1")
//!         .with_group("g1")
//!         .with_students(20)],
//!     SolverConfig::new(5),
//! );
//! let schedule = scheduler.solve();
//! assert_eq!(schedule.len(), 1);
//! ```

mod annealing;
mod greedy;

use log::info;

use crate::index::SolverIndex;
use crate::models::{
    Classroom, Group, ScheduleEntry, SolverConfig, Subject, Teacher, TimeSlot, UnscheduledEntry,
};
use crate::report::ScheduleReport;

/// Default six-day teaching week. Override with
/// [`Scheduler::with_week_days`] to rename or localize the days; the
/// names flow verbatim into [`ScheduleEntry::day`] and into availability
/// grid lookups.
pub const DEFAULT_WEEK_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The timetable solver.
///
/// Holds the loaded input, the dense index built from it, and the solve
/// knobs. Solving is a blocking computation; the annealing phase fans out
/// over rayon internally but `solve` itself never yields.
#[derive(Debug, Clone)]
pub struct Scheduler {
    teachers: Vec<Teacher>,
    groups: Vec<Group>,
    classrooms: Vec<Classroom>,
    subjects: Vec<Subject>,
    time_slots: Vec<TimeSlot>,
    entries: Vec<UnscheduledEntry>,
    config: SolverConfig,
    week_days: Vec<String>,
    index: Option<SolverIndex>,
    chains: Option<usize>,
    seed: Option<u64>,
}

impl Scheduler {
    /// Creates an empty scheduler with the default week.
    pub fn new() -> Self {
        Self {
            teachers: Vec::new(),
            groups: Vec::new(),
            classrooms: Vec::new(),
            subjects: Vec::new(),
            time_slots: Vec::new(),
            entries: Vec::new(),
            config: SolverConfig::default(),
            week_days: DEFAULT_WEEK_DAYS.map(String::from).to_vec(),
            index: None,
            chains: None,
            seed: None,
        }
    }

    /// Replaces the week day names. Call before [`load`](Self::load);
    /// the index maps days by name.
    pub fn with_week_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.week_days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Fixes the base PRNG seed. Chain `i` derives its own seed from it,
    /// making `solve` fully reproducible for a given chain count. Without
    /// this the chains seed from the clock.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fixes the annealing chain count (at least 1). Defaults to one
    /// chain per hardware thread, capped at 8.
    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = Some(chains.max(1));
        self
    }

    /// Loads input and builds the dense index. Idempotent: every call
    /// replaces all previously loaded state.
    #[allow(clippy::too_many_arguments)]
    pub fn load(
        &mut self,
        teachers: Vec<Teacher>,
        groups: Vec<Group>,
        classrooms: Vec<Classroom>,
        subjects: Vec<Subject>,
        time_slots: Vec<TimeSlot>,
        entries: Vec<UnscheduledEntry>,
        config: SolverConfig,
    ) {
        info!(
            "loading {} teachers, {} groups, {} classrooms, {} subjects, {} slots, {} entries",
            teachers.len(),
            groups.len(),
            classrooms.len(),
            subjects.len(),
            time_slots.len(),
            entries.len()
        );
        self.index = Some(SolverIndex::build(
            &teachers,
            &groups,
            &classrooms,
            &subjects,
            &time_slots,
            &entries,
            &self.week_days,
        ));
        self.teachers = teachers;
        self.groups = groups;
        self.classrooms = classrooms;
        self.subjects = subjects;
        self.time_slots = time_slots;
        self.entries = entries;
        self.config = config;
    }

    /// Runs both phases and returns the best schedule found.
    ///
    /// Never fails: with nothing loaded, no placeable entries, or no
    /// rooms/slots at all, the result is simply empty. The returned
    /// entries keep the greedy phase's insertion order.
    pub fn solve(&self) -> Vec<ScheduleEntry> {
        let Some(index) = &self.index else {
            return Vec::new();
        };

        let seed_schedule = greedy::greedy_seed(
            &self.entries,
            index,
            &self.week_days,
            &self.time_slots,
            &self.classrooms,
        );

        let chains = self.chains.unwrap_or_else(annealing::default_chain_count);
        annealing::anneal(
            seed_schedule,
            index,
            &self.config,
            &self.week_days,
            &self.time_slots,
            &self.classrooms,
            chains,
            self.seed,
        )
    }

    /// Feasibility report for a schedule produced by [`solve`](Self::solve).
    pub fn report(&self, schedule: &[ScheduleEntry]) -> ScheduleReport {
        match &self.index {
            Some(index) => ScheduleReport::calculate(schedule, &self.entries, index),
            None => ScheduleReport::default(),
        }
    }

    /// The dense index built by the last [`load`](Self::load), if any.
    pub fn index(&self) -> Option<&SolverIndex> {
        self.index.as_ref()
    }

    /// The loaded config.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
