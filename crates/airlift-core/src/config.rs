//! Engine configuration.
//!
//! Typically built with `SimConfig::default()` and a couple of field
//! overrides; the sweep drivers vary `arrival_quantity` across runs while
//! leaving everything else at the documented defaults.

use crate::rng::FlightTimeSampler;
use crate::{CoreError, CoreResult, SimRng};

// ── LoadRate ──────────────────────────────────────────────────────────────────

/// How many containers move from the queue into the loading airplane per tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadRate {
    /// A fixed number of containers per tick (must be ≥ 1).
    PerTick(u32),
    /// As many as fit the airplane's remaining capacity.
    FillRemaining,
}

impl Default for LoadRate {
    fn default() -> Self {
        LoadRate::PerTick(1)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// The fleet composition is supplied separately (see `airlift-model`'s
/// `FleetPlan`) — this struct holds only the scalar knobs of one run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Containers appended to the arrival queue each tick.  Must be ≥ 1.
    pub arrival_quantity: u32,

    /// Loading throughput per tick.
    pub load_rate: LoadRate,

    /// Mean of the flight-duration distribution, in ticks.
    pub flight_mean: f64,

    /// Scale of the flight-duration distribution; draws outside
    /// `mean ± scale` are rejected and resampled.
    pub flight_scale: f64,

    /// Master RNG seed.  `Some(seed)` makes the run fully reproducible;
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arrival_quantity: 2,
            load_rate:        LoadRate::default(),
            flight_mean:      180.0,
            flight_scale:     60.0,
            seed:             None,
        }
    }
}

impl SimConfig {
    /// Check every knob; returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.arrival_quantity == 0 {
            return Err(CoreError::Config(
                "arrival_quantity must be at least 1".into(),
            ));
        }
        if let LoadRate::PerTick(0) = self.load_rate {
            return Err(CoreError::Config(
                "load_rate PerTick(0) would never load anything".into(),
            ));
        }
        // Delegates the flight-parameter checks to the sampler constructor.
        FlightTimeSampler::new(self.flight_mean, self.flight_scale)?;
        Ok(())
    }

    /// Construct the run's RNG according to `seed`.
    pub fn make_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        }
    }

    /// Construct the flight-duration sampler for this configuration.
    pub fn make_sampler(&self) -> CoreResult<FlightTimeSampler> {
        FlightTimeSampler::new(self.flight_mean, self.flight_scale)
    }
}
