//! Unit tests for the container and airplane entities and the fleet factory.

#[cfg(test)]
mod container {
    use airlift_core::Tick;

    use crate::Container;

    #[test]
    fn waits_undefined_until_stamped() {
        let c = Container::new(Tick(3));
        assert_eq!(c.loading_wait(), None);
        assert_eq!(c.departure_wait(), None);
        assert!(c.loading_wait_or_nan().is_nan());
        assert!(c.departure_wait_or_nan().is_nan());
    }

    #[test]
    fn waits_derive_from_stamps() {
        let mut c = Container::new(Tick(3));
        c.mark_loaded(Tick(5));
        c.mark_departed(Tick(9));
        assert_eq!(c.loading_wait(), Some(2));
        assert_eq!(c.departure_wait(), Some(6));
        assert_eq!(c.loading_wait_or_nan(), 2.0);
    }

    #[test]
    fn zero_wait_is_defined() {
        // Loaded the same tick it arrived — a wait of 0, not "unset".
        let mut c = Container::new(Tick(4));
        c.mark_loaded(Tick(4));
        assert_eq!(c.loading_wait(), Some(0));
    }
}

#[cfg(test)]
mod airplane {
    use airlift_core::{AirplaneId, Tick};

    use crate::{Airplane, Container, ModelError};

    fn full_plane(capacity: u32) -> Airplane {
        let mut plane = Airplane::new(AirplaneId(1), capacity);
        for _ in 0..capacity {
            plane.load(Container::new(Tick(1))).unwrap();
        }
        plane
    }

    #[test]
    fn load_tracks_capacity_invariant() {
        let mut plane = Airplane::new(AirplaneId(1), 3);
        assert!(!plane.is_fully_loaded());
        assert_eq!(plane.remaining_capacity(), 3);

        for i in 0..3 {
            assert_eq!(plane.current_load(), i);
            plane.load(Container::new(Tick(1))).unwrap();
        }
        assert!(plane.is_fully_loaded());
        assert_eq!(plane.remaining_capacity(), 0);
    }

    #[test]
    fn loading_past_capacity_is_rejected() {
        let mut plane = full_plane(2);
        let err = plane.load(Container::new(Tick(1))).unwrap_err();
        assert!(matches!(
            err,
            ModelError::CapacityExceeded { capacity: 2, .. }
        ));
        // The rejected container was not taken on board.
        assert_eq!(plane.current_load(), 2);
    }

    #[test]
    fn depart_stamps_everything_and_schedules_return() {
        let mut plane = full_plane(2);
        let wait = plane.depart(Tick(10), 150);

        assert_eq!(wait, 10); // present since tick 0
        assert_eq!(plane.departed_at(), Some(Tick(10)));
        assert_eq!(plane.returns_at(), Some(Tick(160)));
        for c in plane.containers() {
            assert_eq!(c.departed_at(), Some(Tick(10)));
        }
    }

    #[test]
    fn rejoin_resets_to_present_state() {
        let mut plane = full_plane(2);
        plane.depart(Tick(10), 150);
        plane.rejoin(Tick(160));

        assert_eq!(plane.current_load(), 0);
        assert_eq!(plane.departed_at(), None);
        assert_eq!(plane.returns_at(), None);
        assert_eq!(plane.arrival(), Tick(160));

        // Second cycle measures the wait from the rejoin tick.
        for _ in 0..2 {
            plane.load(Container::new(Tick(161))).unwrap();
        }
        assert_eq!(plane.depart(Tick(165), 120), 5);
    }
}

#[cfg(test)]
mod fleet {
    use airlift_core::{AirplaneId, AirplaneIdGen};

    use crate::{FleetPlan, build_fleet};

    #[test]
    fn reference_plan_builds_five_airplanes() {
        let mut ids = AirplaneIdGen::new();
        let fleet = build_fleet(&FleetPlan::default(), &mut ids).unwrap();

        assert_eq!(fleet.len(), 5);
        assert_eq!(fleet.last().unwrap().id(), AirplaneId(5));
        let capacities: Vec<u32> = fleet.iter().map(|a| a.capacity()).collect();
        assert_eq!(capacities, vec![80, 80, 80, 140, 140]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ids = AirplaneIdGen::new();
        let fleet = build_fleet(&FleetPlan::from_pairs([(10, 2), (20, 2)]), &mut ids).unwrap();
        let id_values: Vec<u32> = fleet.iter().map(|a| a.id().0).collect();
        assert_eq!(id_values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn plan_order_is_preserved_not_sorted() {
        let mut ids = AirplaneIdGen::new();
        let fleet = build_fleet(&FleetPlan::from_pairs([(140, 1), (80, 1)]), &mut ids).unwrap();
        let capacities: Vec<u32> = fleet.iter().map(|a| a.capacity()).collect();
        assert_eq!(capacities, vec![140, 80]);
    }

    #[test]
    fn degenerate_plans_rejected() {
        let mut ids = AirplaneIdGen::new();
        assert!(build_fleet(&FleetPlan(vec![]), &mut ids).is_err());
        assert!(build_fleet(&FleetPlan::from_pairs([(0, 1)]), &mut ids).is_err());
        assert!(build_fleet(&FleetPlan::from_pairs([(80, 0)]), &mut ids).is_err());
    }
}
