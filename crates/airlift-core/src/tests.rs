//! Unit tests for airlift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AirplaneId, AirplaneIdGen};

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut generator = AirplaneIdGen::new();
        assert_eq!(generator.next_id(), AirplaneId(1));
        assert_eq!(generator.next_id(), AirplaneId(2));
        assert_eq!(generator.next_id(), AirplaneId(3));
        assert_eq!(generator.minted(), 3);
    }

    #[test]
    fn independent_generators_do_not_interfere() {
        let mut a = AirplaneIdGen::new();
        let mut b = AirplaneIdGen::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), AirplaneId(1));
    }

    #[test]
    fn ordering_and_display() {
        assert!(AirplaneId(1) < AirplaneId(2));
        assert_eq!(AirplaneId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn first_tick_constant() {
        assert_eq!(Tick::FIRST, Tick(1));
        assert!(Tick::ZERO < Tick::FIRST);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod rng {
    use crate::{FlightTimeSampler, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::seeded(12345);
        let mut r2 = SimRng::seeded(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..1_000_000);
            let b: u64 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn sampler_draws_stay_in_band() {
        let sampler = FlightTimeSampler::new(180.0, 60.0).unwrap();
        let mut rng = SimRng::seeded(42);
        for _ in 0..10_000 {
            let d = sampler.sample(&mut rng).unwrap();
            assert!((120..=240).contains(&d), "duration {d} out of band");
        }
    }

    #[test]
    fn sampler_empirical_mean_near_center() {
        let sampler = FlightTimeSampler::new(180.0, 60.0).unwrap();
        let mut rng = SimRng::seeded(7);
        let n = 10_000u64;
        let total: u64 = (0..n).map(|_| sampler.sample(&mut rng).unwrap()).sum();
        let mean = total as f64 / n as f64;
        // Truncation to integer ticks biases the mean down by ~0.5;
        // sampling noise of 10k draws is well under ±1.5.
        assert!((mean - 180.0).abs() < 2.0, "empirical mean {mean}");
    }

    #[test]
    fn sampler_rejects_bad_parameters() {
        assert!(FlightTimeSampler::new(180.0, 0.0).is_err());
        assert!(FlightTimeSampler::new(180.0, -5.0).is_err());
        assert!(FlightTimeSampler::new(f64::NAN, 60.0).is_err());
        // Band would extend below zero ticks.
        assert!(FlightTimeSampler::new(30.0, 60.0).is_err());
    }

    #[test]
    fn sampler_deterministic_sequence() {
        let sampler = FlightTimeSampler::new(180.0, 60.0).unwrap();
        let mut r1 = SimRng::seeded(99);
        let mut r2 = SimRng::seeded(99);
        let a: Vec<u64> = (0..50).map(|_| sampler.sample(&mut r1).unwrap()).collect();
        let b: Vec<u64> = (0..50).map(|_| sampler.sample(&mut r2).unwrap()).collect();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod config {
    use crate::{LoadRate, SimConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.arrival_quantity, 2);
        assert_eq!(cfg.load_rate, LoadRate::PerTick(1));
    }

    #[test]
    fn zero_arrival_quantity_rejected() {
        let cfg = SimConfig {
            arrival_quantity: 0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_load_rate_rejected() {
        let cfg = SimConfig {
            load_rate: LoadRate::PerTick(0),
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn fill_remaining_is_valid() {
        let cfg = SimConfig {
            load_rate: LoadRate::FillRemaining,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_flight_parameters_rejected() {
        let cfg = SimConfig {
            flight_scale: -1.0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
