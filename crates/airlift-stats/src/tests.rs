//! Unit tests for the statistics accumulator and its projections.

#[cfg(test)]
mod mean_std {
    use crate::mean_std;

    #[test]
    fn empty_series_is_nan_not_panic() {
        let (mean, std) = mean_std(&[]);
        assert!(mean.is_nan());
        assert!(std.is_nan());
    }

    #[test]
    fn single_sample() {
        let (mean, std) = mean_std(&[7]);
        assert_eq!(mean, 7.0);
        assert_eq!(std, 0.0);
    }

    #[test]
    fn population_formula() {
        // mean 5, population variance ((−3)²+(−1)²+1²+3²)/4 = 5
        let (mean, std) = mean_std(&[2, 4, 6, 8]);
        assert_eq!(mean, 5.0);
        assert!((std - 5.0_f64.sqrt()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod accumulator {
    use crate::{AirplaneWaitSample, ModelStats};

    fn seeded_stats() -> ModelStats {
        let mut stats = ModelStats::new();
        stats.extend_loading_waits([1, 2, 3]);
        stats.extend_departure_waits([10, 20]);
        stats.push_airplane_wait(AirplaneWaitSample { capacity: 80, wait: 40 });
        stats.push_airplane_wait(AirplaneWaitSample { capacity: 80, wait: 60 });
        stats.push_airplane_wait(AirplaneWaitSample { capacity: 140, wait: 100 });
        stats
    }

    #[test]
    fn container_summaries() {
        let stats = seeded_stats();
        let (load_mean, _) = stats.loading_wait_summary();
        let (dep_mean, dep_std) = stats.departure_wait_summary();
        assert_eq!(load_mean, 2.0);
        assert_eq!(dep_mean, 15.0);
        assert_eq!(dep_std, 5.0);
    }

    #[test]
    fn per_capacity_breakdown_groups_and_sorts() {
        let stats = seeded_stats();
        let by_capacity = stats.airplane_wait_by_capacity();
        let keys: Vec<u32> = by_capacity.keys().copied().collect();
        assert_eq!(keys, vec![80, 140]);

        let (mean_80, std_80) = by_capacity[&80];
        assert_eq!(mean_80, 50.0);
        assert_eq!(std_80, 10.0);
        let (mean_140, std_140) = by_capacity[&140];
        assert_eq!(mean_140, 100.0);
        assert_eq!(std_140, 0.0);
    }

    #[test]
    fn fresh_stats_summarize_without_panicking() {
        let summary = ModelStats::new().summarize();
        assert!(summary.container_loading.is_empty());
        assert!(summary.container_loading.mean.is_nan());
        assert!(summary.airplane_by_capacity.is_empty());
    }

    #[test]
    fn summary_counts_match_samples() {
        let summary = seeded_stats().summarize();
        assert_eq!(summary.container_loading.count, 3);
        assert_eq!(summary.container_departure.count, 2);
        assert_eq!(summary.airplane_by_capacity[&80].count, 2);
        assert_eq!(summary.airplane_by_capacity[&140].count, 1);
    }
}

#[cfg(test)]
mod summary {
    use crate::{AirplaneWaitSample, ModelStats};

    #[test]
    fn serializes_to_flat_json() {
        let mut stats = ModelStats::new();
        stats.extend_loading_waits([2, 2]);
        stats.extend_departure_waits([8, 12]);
        stats.push_airplane_wait(AirplaneWaitSample { capacity: 80, wait: 50 });

        let json = serde_json::to_string(&stats.summarize()).unwrap();
        assert!(json.contains("\"container_loading\""));
        assert!(json.contains("\"airplane_by_capacity\""));
        assert!(json.contains("\"80\""));
    }

    #[test]
    fn empty_metrics_serialize_as_null() {
        let json = serde_json::to_string(&ModelStats::new().summarize()).unwrap();
        // serde_json renders NaN as null.
        assert!(json.contains("\"mean\":null"));
    }
}
