//! Cost-driven academic timetable solver.
//!
//! Assigns class sessions (lectures, seminars, labs) to
//! (day, time slot, classroom) triples under hard conflicts and soft
//! preferences. The problem is over-constrained in practice, so the
//! solver optimizes a scalar cost instead of searching for perfect
//! feasibility: a greedy pass builds a conflict-free seed, then parallel
//! simulated annealing chains refine it and the cheapest result wins.
//!
//! # Modules
//!
//! - **`models`**: Input value objects — `Teacher`, `Group`, `Classroom`,
//!   `Subject`, `TimeSlot`, `UnscheduledEntry`, `SolverConfig` — and the
//!   output `ScheduleEntry`
//! - **`index`**: Dense constraint tables built once per load
//! - **`cost`**: Single-pass schedule scoring
//! - **`solver`**: The two-phase `Scheduler`
//! - **`report`**: Post-solve feasibility inspection
//!
//! # Architecture
//!
//! Control flow is strictly linear: input → index → greedy seed →
//! parallel annealing → schedule. The index is immutable after `load`;
//! annealing chains share it read-only and own everything else, so the
//! hot loop runs without locks or atomics.
//!
//! The solver never fails on malformed references: unknown ids drop out
//! of the derived tables and unplaceable sessions are left out of the
//! result. Inspect the [`report::ScheduleReport`] when feasibility
//! matters.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod cost;
pub mod index;
pub mod models;
pub mod report;
pub mod solver;

pub use solver::Scheduler;
