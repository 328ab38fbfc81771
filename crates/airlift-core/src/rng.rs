//! Deterministic RNG wrapper and the truncated-normal flight-time sampler.
//!
//! # Determinism strategy
//!
//! The engine owns exactly one [`SimRng`].  Constructed from an explicit seed
//! it reproduces the whole draw sequence, so a seeded run is bit-identical
//! across executions; constructed from entropy each run differs.  Flight
//! durations are the only random quantity in the simulation — one draw per
//! airplane departure.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::{CoreError, CoreResult};

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the engine is exclusively owned by
/// one caller, so no synchronisation is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic construction — the same seed always produces the same
    /// draw sequence.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible construction from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distribution
    /// types (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── FlightTimeSampler ─────────────────────────────────────────────────────────

/// Upper bound on rejection-sampling attempts per draw.
///
/// With the default parameters a draw is accepted with probability ≈ 68 %
/// (±1σ of a normal), so hitting this bound requires a run of ~10⁻⁵⁰⁰⁰
/// probability.  The cap exists so a degenerate configuration fails fast with
/// a diagnostic instead of spinning forever.
const MAX_ATTEMPTS: u32 = 10_000;

/// Draws integer flight durations from a truncated normal distribution.
///
/// A draw is sampled from `Normal(mean, scale)`, rejected and resampled while
/// it falls outside the inclusive band `[mean - scale, mean + scale]`, and
/// the accepted value is truncated to whole ticks.  With the defaults
/// (`mean = 180`, `scale = 60`) every duration lands in `[120, 240]`.
pub struct FlightTimeSampler {
    dist: Normal<f64>,
    lo:   f64,
    hi:   f64,
}

impl FlightTimeSampler {
    /// Build a sampler for `Normal(mean, scale)` truncated to ±`scale`.
    ///
    /// Fails with [`CoreError::Distribution`] when the parameters are
    /// non-finite, `scale` is not strictly positive, or the lower band edge
    /// `mean - scale` is negative (durations are unsigned ticks).
    pub fn new(mean: f64, scale: f64) -> CoreResult<Self> {
        if !mean.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(CoreError::Distribution(format!(
                "flight time requires finite mean and scale > 0, got mean={mean}, scale={scale}"
            )));
        }
        if mean - scale < 0.0 {
            return Err(CoreError::Distribution(format!(
                "flight time band [{}, {}] extends below zero",
                mean - scale,
                mean + scale
            )));
        }
        let dist = Normal::new(mean, scale)
            .map_err(|e| CoreError::Distribution(e.to_string()))?;
        Ok(Self {
            dist,
            lo: mean - scale,
            hi: mean + scale,
        })
    }

    /// Draw one flight duration in whole ticks.
    ///
    /// Never returns a value outside `[mean - scale, mean + scale]`.  The
    /// resample loop is bounded; exhaustion is a configuration defect
    /// surfaced as [`CoreError::SamplerExhausted`].
    pub fn sample(&self, rng: &mut SimRng) -> CoreResult<u64> {
        for _ in 0..MAX_ATTEMPTS {
            let value = self.dist.sample(rng.inner());
            if (self.lo..=self.hi).contains(&value) {
                return Ok(value.trunc() as u64);
            }
        }
        Err(CoreError::SamplerExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Inclusive acceptance band, in ticks.
    #[inline]
    pub fn band(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}
