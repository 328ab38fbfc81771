//! `airlift-stats` — wait-time accumulation and summary projections.
//!
//! [`ModelStats`] is append-only: the engine pushes raw samples at each
//! airplane departure and never reads them back.  All aggregates — per-metric
//! mean/standard deviation and the per-capacity breakdown — are pure
//! projections recomputed on demand, and every projection tolerates an empty
//! sample set by reporting `NaN` rather than panicking.
//!
//! [`RunSummary`] is the serializable form batch drivers persist.

pub mod accumulator;
pub mod summary;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accumulator::{AirplaneWaitSample, ModelStats};
pub use summary::{MetricSummary, RunSummary};

/// Population mean and standard deviation (ddof = 0) of a sample set.
///
/// Both are `NaN` for an empty set — an undefined statistic is reported,
/// never compared or crashed on.
pub fn mean_std(samples: &[u64]) -> (f64, f64) {
    if samples.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}
