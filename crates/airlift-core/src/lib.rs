//! `airlift-core` — foundational types for the airlift cargo-dispatch
//! simulation.
//!
//! This crate is a dependency of every other `airlift-*` crate.  It
//! intentionally has no `airlift-*` dependencies and minimal external ones
//! (only `rand`/`rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `AirplaneId`, `AirplaneIdGen`                           |
//! | [`time`]   | `Tick`                                                  |
//! | [`rng`]    | `SimRng` (seedable), `FlightTimeSampler`                |
//! | [`config`] | `SimConfig`, `LoadRate`                                 |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LoadRate, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{AirplaneId, AirplaneIdGen};
pub use rng::{FlightTimeSampler, SimRng};
pub use time::Tick;
