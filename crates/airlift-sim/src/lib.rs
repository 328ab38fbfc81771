//! `airlift-sim` — the tick loop orchestrator for the airlift simulation.
//!
//! # Per-tick phases
//!
//! ```text
//! for tick in 1..=steps:
//!   ① Arrivals    — enqueue arrival_quantity new containers at the queue tail.
//!   ② Returns     — airplanes whose flight ends this tick rejoin the
//!                   present pool, emptied and reset.
//!   ③ Selection   — if no airplane is loading, pick one from the present
//!                   pool via the SelectionPolicy (lowest capacity first).
//!                   Empty pool → the tick ends early, timer still advances.
//!   ④ Loading     — move up to the configured load rate of containers from
//!                   the queue head into the loading airplane, FIFO.
//!                   Suppressed on tick 1 (one-tick warm-up delay).
//!   ⑤ Departure   — a fully loaded airplane departs: waits are recorded,
//!                   a flight duration is drawn, and the airplane moves to
//!                   the away pool.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use airlift_core::SimConfig;
//! use airlift_model::FleetPlan;
//! use airlift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), FleetPlan::default()).build()?;
//! let stats = sim.run(1000, &mut NoopObserver)?;
//! println!("{:?}", stats.summarize());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod policy;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{DepartureReport, LoadingInfo, NoopObserver, SimObserver, TickState};
pub use policy::{LowestCapacityFirst, SelectionPolicy};
pub use sim::Simulation;
