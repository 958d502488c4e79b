//! Timetabling domain models.
//!
//! The value objects the solver consumes and produces. Callers construct
//! them from whatever serialization the host application uses; ids are
//! opaque strings and references between entities are by id. The solver
//! never mutates input objects.

mod availability;
mod classroom;
mod config;
mod entry;
mod group;
mod subject;
mod teacher;
mod time_slot;

pub use availability::{Availability, AvailabilityGrid};
pub use classroom::Classroom;
pub use config::{
    RuleAction, RuleCondition, RuleSeverity, SchedulingRule, Settings, SolverConfig,
};
pub use entry::{ScheduleEntry, UnscheduledEntry};
pub use group::Group;
pub use subject::Subject;
pub use teacher::Teacher;
pub use time_slot::TimeSlot;
