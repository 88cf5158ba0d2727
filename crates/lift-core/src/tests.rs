//! Unit tests for lift-core primitives.

#[cfg(test)]
mod round {
    use crate::Round;

    #[test]
    fn arithmetic() {
        let r = Round(10);
        assert_eq!(r + 5, Round(15));
        let mut r = Round::ZERO;
        r.advance();
        r.advance();
        assert_eq!(r, Round(2));
    }

    #[test]
    fn display() {
        assert_eq!(Round(7).to_string(), "R7");
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Floor::GROUND.index(), 0);
        assert_eq!(Floor(6).index(), 5);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(5)), 3);
        assert_eq!(Floor(5).distance(Floor(2)), 3);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn neighbors() {
        assert_eq!(Floor(3).above(), Floor(4));
        assert_eq!(Floor(3).below(), Floor(2));
    }

    #[test]
    fn ordering() {
        assert!(Floor::GROUND < Floor(2));
        assert!(Floor(10) > Floor(9));
    }

    #[test]
    fn display() {
        assert_eq!(Floor(3).to_string(), "F3");
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, SimConfig};

    fn valid() -> SimConfig {
        SimConfig {
            num_floors:        6,
            num_elevators:     2,
            elevator_capacity: 3,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().max_floor(), Floor(6));
    }

    #[test]
    fn single_floor_building_rejected() {
        let mut cfg = valid();
        cfg.num_floors = 1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_elevators_rejected() {
        let mut cfg = valid();
        cfg.num_elevators = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let mut cfg = valid();
        cfg.elevator_capacity = 0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(1..=1000);
            let b: u32 = r2.gen_range(1..=1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let mut c0 = root1.child(0);
        let mut c1 = root2.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "children at different offsets should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v: u32 = rng.gen_range(1..=6);
            assert!((1..=6).contains(&v));
        }
    }
}
