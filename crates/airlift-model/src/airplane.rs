//! The airplane entity and its loading/departure state machine.
//!
//! Lifecycle is cyclic and never terminal:
//!
//! ```text
//! PRESENT ──select──▶ LOADING ──full──▶ DEPARTED(flying) ──return──▶ PRESENT
//! ```
//!
//! The entity itself only enforces the capacity invariant; which airplane is
//! loading and when it departs is decided by the engine.

use airlift_core::{AirplaneId, Tick};

use crate::container::Container;
use crate::error::{ModelError, ModelResult};

/// One airplane of the fixed fleet.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airplane {
    id:         AirplaneId,
    capacity:   u32,
    /// Tick at which the airplane (last) became available in the present
    /// pool; while flying, the scheduled return tick.
    arrival:    Tick,
    departed:   Option<Tick>,
    /// Insertion order is load order.  `len() ≤ capacity` at all times.
    containers: Vec<Container>,
}

impl Airplane {
    /// A fresh airplane, present from tick 0.
    pub fn new(id: AirplaneId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            arrival: Tick::ZERO,
            departed: None,
            containers: Vec::with_capacity(capacity as usize),
        }
    }

    #[inline]
    pub fn id(&self) -> AirplaneId {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }

    #[inline]
    pub fn departed_at(&self) -> Option<Tick> {
        self.departed
    }

    #[inline]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[inline]
    pub fn current_load(&self) -> u32 {
        self.containers.len() as u32
    }

    #[inline]
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity - self.current_load()
    }

    /// `true` iff `current_load == capacity`.
    #[inline]
    pub fn is_fully_loaded(&self) -> bool {
        self.current_load() == self.capacity
    }

    /// Scheduled return tick while flying (`arrival` doubles as the return
    /// schedule between departure and rejoin).
    #[inline]
    pub fn returns_at(&self) -> Option<Tick> {
        self.departed.map(|_| self.arrival)
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Take one container on board.
    ///
    /// Loading past capacity is a caller contract violation — the engine
    /// always computes `remaining_capacity` first, so this failing at
    /// runtime indicates a defect, not a recoverable condition.
    pub fn load(&mut self, container: Container) -> ModelResult<()> {
        if self.is_fully_loaded() {
            return Err(ModelError::CapacityExceeded {
                id:       self.id,
                capacity: self.capacity,
            });
        }
        self.containers.push(container);
        Ok(())
    }

    /// Depart at `now`: stamp the airplane and every container on board,
    /// then schedule the return at `now + flight_duration`.
    ///
    /// Returns the load wait — ticks spent present before departing — which
    /// must be captured here because `arrival` is repurposed to hold the
    /// scheduled return tick for the duration of the flight.
    pub fn depart(&mut self, now: Tick, flight_duration: u64) -> u64 {
        let load_wait = now.since(self.arrival);
        for container in &mut self.containers {
            container.mark_departed(now);
        }
        self.departed = Some(now);
        self.arrival = now + flight_duration;
        load_wait
    }

    /// Rejoin the present pool at `now`: containers are gone, the departure
    /// stamp is cleared, and the availability clock restarts.
    pub fn rejoin(&mut self, now: Tick) {
        self.containers.clear();
        self.departed = None;
        self.arrival = now;
    }
}
