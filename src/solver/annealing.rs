//! Parallel simulated annealing.
//!
//! Runs several independent annealing chains over copies of the greedy
//! seed and keeps the best schedule any chain saw. Chains share only the
//! read-only index; there is no communication, no locking, and no work
//! stealing — one chain is one self-contained workload on the rayon pool.
//!
//! The move set is deliberately blunt: reassign one random entry to a
//! uniformly random (day, slot, room) from the full universes and let the
//! cost function arbitrate. Infeasible moves price themselves out through
//! the hard-conflict term.
//!
//! # Reference
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//! Annealing"

use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::cost::schedule_cost;
use crate::index::SolverIndex;
use crate::models::{Classroom, ScheduleEntry, SolverConfig, TimeSlot};

const INITIAL_TEMPERATURE: f64 = 1000.0;
const COOLING_RATE: f64 = 0.995;
const ITERATIONS: u32 = 5000;
/// Seed spacing that keeps chains apart even when started within the
/// same clock tick.
const CHAIN_SEED_STRIDE: u64 = 777;

/// Default chain count: one per hardware thread, capped at 8.
pub(crate) fn default_chain_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(8)
}

/// Refines the seed schedule across `chains` independent chains and
/// returns the best schedule found. Ties go to the lowest chain id.
///
/// An empty seed is returned as-is.
pub(crate) fn anneal(
    seed_schedule: Vec<ScheduleEntry>,
    index: &SolverIndex,
    config: &SolverConfig,
    week_days: &[String],
    time_slots: &[TimeSlot],
    classrooms: &[Classroom],
    chains: usize,
    base_seed: Option<u64>,
) -> Vec<ScheduleEntry> {
    if seed_schedule.is_empty() {
        return seed_schedule;
    }

    let base = base_seed.unwrap_or_else(clock_seed);
    info!("annealing across {chains} chains");

    let results: Vec<(Vec<ScheduleEntry>, f64)> = (0..chains)
        .into_par_iter()
        .map(|chain| {
            let seed = base.wrapping_add(chain as u64 * CHAIN_SEED_STRIDE);
            let result = run_chain(
                seed,
                &seed_schedule,
                index,
                config,
                week_days,
                time_slots,
                classrooms,
            );
            debug!("chain {chain} finished at cost {}", result.1);
            result
        })
        .collect();

    let mut winner = 0;
    for (chain, result) in results.iter().enumerate().skip(1) {
        if result.1 < results[winner].1 {
            winner = chain;
        }
    }
    info!("chain {winner} wins at cost {}", results[winner].1);

    let mut results = results;
    results.swap_remove(winner).0
}

/// One annealing trajectory. Strictly sequential; the accept decision of
/// each iteration is visible to the next.
fn run_chain(
    seed: u64,
    start: &[ScheduleEntry],
    index: &SolverIndex,
    config: &SolverConfig,
    week_days: &[String],
    time_slots: &[TimeSlot],
    classrooms: &[Classroom],
) -> (Vec<ScheduleEntry>, f64) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current = start.to_vec();
    let mut current_cost = schedule_cost(&current, index, config);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = INITIAL_TEMPERATURE;

    for _ in 0..ITERATIONS {
        let mut neighbor = current.clone();
        let victim = rng.random_range(0..neighbor.len());
        let d = rng.random_range(0..week_days.len());
        let s = rng.random_range(0..time_slots.len());
        let r = rng.random_range(0..classrooms.len());

        let entry = &mut neighbor[victim];
        entry.day = week_days[d].clone();
        entry.time_slot_id = time_slots[s].id.clone();
        entry.classroom_id = classrooms[r].id.clone();

        let neighbor_cost = schedule_cost(&neighbor, index, config);
        let delta = neighbor_cost - current_cost;

        if delta < 0.0 || (-delta / temperature).exp() > rng.random::<f64>() {
            current = neighbor;
            current_cost = neighbor_cost;
            if current_cost < best_cost {
                best_cost = current_cost;
                best = current.clone();
            }
        }
        temperature *= COOLING_RATE;
    }

    (best, best_cost)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
