//! Airplane identity.
//!
//! Ids are minted by an explicit [`AirplaneIdGen`] owned by whoever builds the
//! fleet and threaded through construction calls — there is no process-wide
//! counter, so independent simulations never observe each other's ids.

use std::fmt;

// ── AirplaneId ───────────────────────────────────────────────────────────────

/// Unique identifier of one airplane within a fleet.
///
/// Positive, monotonically increasing in construction order, never reused.
/// `Copy + Ord + Hash` so it can be used as a map key and sorted without
/// ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirplaneId(pub u32);

impl fmt::Display for AirplaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── AirplaneIdGen ────────────────────────────────────────────────────────────

/// Monotonic id generator.  The first id minted is 1; id 0 is never issued.
#[derive(Debug, Default)]
pub struct AirplaneIdGen {
    last: u32,
}

impl AirplaneIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.  Ids within one generator are strictly increasing.
    #[inline]
    pub fn next_id(&mut self) -> AirplaneId {
        self.last += 1;
        AirplaneId(self.last)
    }

    /// How many ids have been minted so far.
    #[inline]
    pub fn minted(&self) -> u32 {
        self.last
    }
}
