//! Simulation observer trait and the per-tick state it is fed.
//!
//! The engine itself never prints; it exposes the data its human-readable
//! state lines are built from and lets an observer render (or ignore) them.

use airlift_core::{AirplaneId, Tick};
use airlift_stats::ModelStats;

// ── State snapshots ───────────────────────────────────────────────────────────

/// The loading airplane as visible at the end of a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadingInfo {
    pub id:       AirplaneId,
    pub capacity: u32,
    pub load:     u32,
}

/// Observable engine state at the end of one tick.
///
/// `loading == None` with `just_departed` set means the loading airplane left
/// this tick; `None` without it means no airplane was available.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickState {
    pub tick:          Tick,
    pub total_arrived: u64,
    pub queue_len:     usize,
    pub present_count: usize,
    pub loading:       Option<LoadingInfo>,
    pub just_departed: bool,
}

/// Emitted once per airplane departure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DepartureReport {
    pub id:          AirplaneId,
    pub capacity:    u32,
    /// Containers on board — always equals `capacity` (airplanes only depart
    /// full).
    pub load:        u32,
    pub departed_at: Tick,
    pub returns_at:  Tick,
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the end of every tick with the observable engine state.
    fn on_tick_end(&mut self, _state: &TickState) {}

    /// Called whenever an airplane departs, before that tick's
    /// `on_tick_end`.
    fn on_departure(&mut self, _report: &DepartureReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &ModelStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want per-tick output.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
