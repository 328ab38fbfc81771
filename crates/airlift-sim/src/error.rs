//! Engine error type.
//!
//! All variants are fatal to the current `run` invocation; nothing is retried
//! internally.  "No airplane available" is a normal policy outcome and never
//! surfaces here.

use airlift_core::CoreError;
use airlift_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// `run(0)` — the step count must be a positive integer.
    #[error("steps must be a positive integer, got {0}")]
    InvalidSteps(u64),

    /// Second `run` call on one instance.  State exhaustion, not a
    /// recoverable condition: build a fresh `Simulation` per run.
    #[error("a Simulation instance can only be used for a single run")]
    AlreadyUsed,

    /// Entity invariant violation (capacity overrun, bad fleet plan).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Configuration or flight-time sampling failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
