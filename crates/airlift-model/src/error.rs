//! Entity-level error type.

use airlift_core::AirplaneId;
use thiserror::Error;

/// Errors raised by the entities themselves.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Attempt to load a container into an already-full airplane.  The
    /// engine computes remaining capacity before every transfer, so this is
    /// asserted defensively and should be unreachable by construction.
    #[error("airplane {id} is already at capacity {capacity}")]
    CapacityExceeded { id: AirplaneId, capacity: u32 },

    #[error("invalid fleet plan: {0}")]
    InvalidPlan(String),
}

/// Shorthand result type for `airlift-model`.
pub type ModelResult<T> = Result<T, ModelError>;
