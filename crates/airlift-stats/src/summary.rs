//! Serializable aggregate of one run.
//!
//! `serde_json` renders the `NaN` of an empty metric as `null`, which is what
//! downstream notebooks expect for "no samples collected".

use std::collections::BTreeMap;

/// Count, mean, and population standard deviation of one sample series.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct MetricSummary {
    pub count: usize,
    pub mean:  f64,
    pub std:   f64,
}

impl MetricSummary {
    pub fn of(samples: &[u64]) -> Self {
        let (mean, std) = crate::mean_std(samples);
        Self {
            count: samples.len(),
            mean,
            std,
        }
    }

    /// `true` when the series had no samples (mean/std are `NaN`).
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The aggregate result of one simulation run.
///
/// Batch drivers collect many of these as `{parameter: [RunSummary, …]}` and
/// persist the whole map as one flat JSON document.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// Container waits from arrival to loading.
    pub container_loading: MetricSummary,
    /// Container waits from arrival to the airplane's departure.
    pub container_departure: MetricSummary,
    /// Airplane load waits, keyed by capacity (ascending).
    pub airplane_by_capacity: BTreeMap<u32, MetricSummary>,
}
