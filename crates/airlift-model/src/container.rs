//! The container entity.
//!
//! A container is stamped three times over its life: on arrival (at
//! construction), when it is lifted out of the queue into an airplane, and
//! when that airplane departs.  The latter two are `Option<Tick>` — explicit
//! absence instead of a `-1` sentinel — and each is set exactly once.

use airlift_core::Tick;

/// One unit of cargo flowing through the system.
///
/// Owned by the arrival queue until loaded; ownership transfers to an
/// [`Airplane`][crate::Airplane] on load and the container leaves the system
/// conceptually at departure (its stamps are read once into the statistics).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    arrival:  Tick,
    loaded:   Option<Tick>,
    departed: Option<Tick>,
}

impl Container {
    /// A container arriving at `arrival`.
    pub fn new(arrival: Tick) -> Self {
        Self {
            arrival,
            loaded: None,
            departed: None,
        }
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    #[inline]
    pub fn loaded_at(&self) -> Option<Tick> {
        self.loaded
    }

    #[inline]
    pub fn departed_at(&self) -> Option<Tick> {
        self.departed
    }

    /// Stamp the loading tick.  Debug-asserts single assignment and that the
    /// stamp does not precede arrival — either would be an engine defect.
    pub fn mark_loaded(&mut self, now: Tick) {
        debug_assert!(self.loaded.is_none(), "container loaded twice");
        debug_assert!(now >= self.arrival, "loaded before arrival");
        self.loaded = Some(now);
    }

    /// Stamp the departure tick.
    pub fn mark_departed(&mut self, now: Tick) {
        debug_assert!(self.departed.is_none(), "container departed twice");
        debug_assert!(now >= self.arrival, "departed before arrival");
        self.departed = Some(now);
    }

    // ── Derived wait times ────────────────────────────────────────────────

    /// Ticks spent waiting in the queue, once loaded.
    #[inline]
    pub fn loading_wait(&self) -> Option<u64> {
        self.loaded.map(|t| t.since(self.arrival))
    }

    /// Ticks from arrival to the airplane's departure, once departed.
    #[inline]
    pub fn departure_wait(&self) -> Option<u64> {
        self.departed.map(|t| t.since(self.arrival))
    }

    /// Float view of [`loading_wait`][Self::loading_wait]; `NaN` while the
    /// container is still queued.  Undefined waits are reported, never
    /// compared numerically.
    #[inline]
    pub fn loading_wait_or_nan(&self) -> f64 {
        self.loading_wait().map_or(f64::NAN, |w| w as f64)
    }

    /// Float view of [`departure_wait`][Self::departure_wait]; `NaN` while
    /// the container has not departed.
    #[inline]
    pub fn departure_wait_or_nan(&self) -> f64 {
        self.departure_wait().map_or(f64::NAN, |w| w as f64)
    }
}
