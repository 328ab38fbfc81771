//! `airlift-model` — the entities moved around by the simulation engine.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`container`]| `Container` — arrival/loading/departure stamps        |
//! | [`airplane`] | `Airplane` — capacity, load, scheduling times         |
//! | [`fleet`]    | `FleetPlan`, `CapacityCount`, `build_fleet`           |
//! | [`error`]    | `ModelError`, `ModelResult`                           |
//!
//! Entities here are plain state holders with invariant-preserving methods;
//! all policy (who loads when, who departs) lives in `airlift-sim`.

pub mod airplane;
pub mod container;
pub mod error;
pub mod fleet;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use airplane::Airplane;
pub use container::Container;
pub use error::{ModelError, ModelResult};
pub use fleet::{CapacityCount, FleetPlan, build_fleet};
