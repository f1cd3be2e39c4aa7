//! Unit tests for epi-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CityId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(CityId::INVALID.0, u32::MAX);
        assert_eq!(CityId::default(), CityId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.next(), Day(11));
        assert_eq!(Day(15) - Day(10), 5);
        assert_eq!(Day(15).since(Day(3)), 12);
        assert_eq!(Day(3).to_string(), "D3");
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
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_differ_by_offset() {
        let mut root_a = SimRng::new(1);
        let mut root_b = SimRng::new(1);
        let a: u64 = root_a.child(0).random();
        let b: u64 = root_b.child(1).random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(3.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn sample_indices_distinct_and_clamped() {
        let mut rng = SimRng::new(9);
        let mut picked = rng.sample_indices(10, 10);
        picked.sort_unstable();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());

        assert_eq!(rng.sample_indices(3, 8).len(), 3);
        assert!(rng.sample_indices(0, 4).is_empty());
        assert!(rng.sample_indices(5, 0).is_empty());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{EpiConfig, EpiError, HealingPolicy, HubParams, PopulationRule};

    #[test]
    fn default_is_valid() {
        EpiConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_days() {
        let cfg = EpiConfig { no_days: 0, ..EpiConfig::default() };
        assert!(matches!(cfg.validate(), Err(EpiError::Config(_))));
    }

    #[test]
    fn rejects_infection_prob_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = EpiConfig { infection_prob: p, ..EpiConfig::default() };
            assert!(cfg.validate().is_err(), "infection_prob {p} should be rejected");
        }
    }

    #[test]
    fn rejects_non_positive_decay() {
        for lambda in [0.0, -2.0, f64::INFINITY] {
            let cfg = EpiConfig { travel_decay: lambda, ..EpiConfig::default() };
            assert!(cfg.validate().is_err(), "travel_decay {lambda} should be rejected");
        }
    }

    #[test]
    fn rejects_bad_healing() {
        let cfg = EpiConfig {
            healing: HealingPolicy::Constant { prob: 1.2 },
            ..EpiConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = EpiConfig { healing_ceiling: 0, ..EpiConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_topology() {
        for params in [
            HubParams { keep_prob: 0.0, ..HubParams::default() },
            HubParams { keep_prob: 1.0, ..HubParams::default() },
            HubParams { branching: 0, ..HubParams::default() },
            HubParams { initial_leaves: 0, ..HubParams::default() },
            HubParams { max_cities: 4, ..HubParams::default() },
        ] {
            assert!(params.validate().is_err(), "{params:?} should be rejected");
        }
    }

    #[test]
    fn healing_probabilities() {
        assert_eq!(HealingPolicy::None.probability(10), 0.0);
        assert_eq!(HealingPolicy::Constant { prob: 0.25 }.probability(3), 0.25);
        let ramp = HealingPolicy::Ramp { per_day: 0.1 };
        assert!((ramp.probability(3) - 0.3).abs() < 1e-12);
        assert_eq!(ramp.probability(50), 1.0);
    }

    #[test]
    fn population_rule_floor() {
        let rule = PopulationRule { per_link: 100, minimum: 50 };
        assert_eq!(rule.residents_for_degree(0), 50);
        assert_eq!(rule.residents_for_degree(3), 300);
        assert_eq!(PopulationRule::default().residents_for_degree(1), 2_000);
    }
}
