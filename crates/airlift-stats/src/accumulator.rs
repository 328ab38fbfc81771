//! The append-only statistics accumulator.

use std::collections::BTreeMap;

use crate::mean_std;
use crate::summary::{MetricSummary, RunSummary};

// ── AirplaneWaitSample ───────────────────────────────────────────────────────

/// One airplane departure: how long a plane of `capacity` sat present and
/// loading before it left.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub struct AirplaneWaitSample {
    pub capacity: u32,
    pub wait:     u64,
}

// ── ModelStats ───────────────────────────────────────────────────────────────

/// Collected wait-time samples for one simulation run.
///
/// Three series are recorded at every airplane departure:
/// - per container: ticks from arrival to loading,
/// - per container: ticks from arrival to departure,
/// - per airplane: ticks from becoming present to departing, tagged by
///   capacity.
#[derive(Clone, Debug, Default)]
pub struct ModelStats {
    airplane_waits:  Vec<AirplaneWaitSample>,
    loading_waits:   Vec<u64>,
    departure_waits: Vec<u64>,
}

impl ModelStats {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Recording ─────────────────────────────────────────────────────────

    pub fn push_airplane_wait(&mut self, sample: AirplaneWaitSample) {
        self.airplane_waits.push(sample);
    }

    pub fn push_loading_wait(&mut self, wait: u64) {
        self.loading_waits.push(wait);
    }

    pub fn push_departure_wait(&mut self, wait: u64) {
        self.departure_waits.push(wait);
    }

    pub fn extend_loading_waits(&mut self, waits: impl IntoIterator<Item = u64>) {
        self.loading_waits.extend(waits);
    }

    pub fn extend_departure_waits(&mut self, waits: impl IntoIterator<Item = u64>) {
        self.departure_waits.extend(waits);
    }

    // ── Raw series (for histogram rendering by external consumers) ────────

    #[inline]
    pub fn airplane_waits(&self) -> &[AirplaneWaitSample] {
        &self.airplane_waits
    }

    #[inline]
    pub fn loading_waits(&self) -> &[u64] {
        &self.loading_waits
    }

    #[inline]
    pub fn departure_waits(&self) -> &[u64] {
        &self.departure_waits
    }

    // ── Projections ───────────────────────────────────────────────────────

    /// Mean/std of container queue-to-loading waits.
    pub fn loading_wait_summary(&self) -> (f64, f64) {
        mean_std(&self.loading_waits)
    }

    /// Mean/std of container arrival-to-departure waits.
    pub fn departure_wait_summary(&self) -> (f64, f64) {
        mean_std(&self.departure_waits)
    }

    /// Mean/std of airplane load waits, grouped by capacity.
    ///
    /// A `BTreeMap` keeps the breakdown in ascending capacity order so
    /// reports and persisted summaries are stable.
    pub fn airplane_wait_by_capacity(&self) -> BTreeMap<u32, (f64, f64)> {
        let mut grouped: BTreeMap<u32, Vec<u64>> = BTreeMap::new();
        for sample in &self.airplane_waits {
            grouped.entry(sample.capacity).or_default().push(sample.wait);
        }
        grouped
            .into_iter()
            .map(|(capacity, waits)| (capacity, mean_std(&waits)))
            .collect()
    }

    /// The serializable aggregate consumed by reporting and batch drivers.
    pub fn summarize(&self) -> RunSummary {
        RunSummary {
            container_loading:  MetricSummary::of(&self.loading_waits),
            container_departure: MetricSummary::of(&self.departure_waits),
            airplane_by_capacity: self
                .airplane_wait_by_capacity()
                .into_iter()
                .map(|(capacity, (mean, std))| {
                    let count = self
                        .airplane_waits
                        .iter()
                        .filter(|s| s.capacity == capacity)
                        .count();
                    (capacity, MetricSummary { count, mean, std })
                })
                .collect(),
        }
    }
}
