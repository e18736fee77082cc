//! Unit tests for agg-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Bounds, Position};

    #[test]
    fn squared_distance_3_4_5() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_2(b), 25.0);
        assert_eq!(b.distance_2(a), 25.0);
    }

    #[test]
    fn bounds_contains_is_half_open() {
        let b = Bounds::new(10.0, 5.0);
        assert!(b.contains(Position::new(0.0, 0.0)));
        assert!(b.contains(Position::new(9.99, 4.99)));
        assert!(!b.contains(Position::new(10.0, 1.0)));
        assert!(!b.contains(Position::new(1.0, -0.1)));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn multiple_of_interval() {
        assert!(Tick(0).is_multiple_of(3));
        assert!(Tick(9).is_multiple_of(3));
        assert!(!Tick(10).is_multiple_of(3));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn clock_starts_at_zero_and_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod config {
    use crate::{AggError, AggregationConfig, Bounds, RunConfig, Tick};

    #[test]
    fn defaults_match_reference_experiment() {
        let cfg = AggregationConfig::default();
        assert_eq!(cfg.d, 20);
        assert_eq!(cfg.factor_a, 2.6);
        assert_eq!(cfg.factor_b, 2.2);
        assert_eq!(cfg.t_join, 50);
        assert_eq!(cfg.t_leave, 150);
        assert!(cfg.validate().is_ok());

        let run = RunConfig::default();
        assert_eq!(run.agent_count, 50);
        assert_eq!(run.end_tick(), Tick(1200));
        assert!(run.validate().is_ok());
    }

    fn assert_invalid(cfg: AggregationConfig) {
        assert!(matches!(cfg.validate(), Err(AggError::InvalidConfig(_))), "{cfg:?}");
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert_invalid(AggregationConfig { d: 0, ..Default::default() });
        assert_invalid(AggregationConfig { factor_a: 0.0, ..Default::default() });
        assert_invalid(AggregationConfig { factor_a: -1.0, ..Default::default() });
        assert_invalid(AggregationConfig { factor_b: 0.0, ..Default::default() });
        assert_invalid(AggregationConfig { factor_b: f64::NAN, ..Default::default() });
        assert_invalid(AggregationConfig { t_join: 0, ..Default::default() });
        assert_invalid(AggregationConfig { t_leave: 0, ..Default::default() });
        assert_invalid(AggregationConfig { sensing_radius: 0.0, ..Default::default() });
        assert_invalid(AggregationConfig { sensing_radius: -5.0, ..Default::default() });
        assert_invalid(AggregationConfig { join_jitter_std: -0.1, ..Default::default() });
    }

    #[test]
    fn zero_jitter_is_allowed() {
        let cfg = AggregationConfig { join_jitter_std: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn run_config_rejects_empty_bounds() {
        let run = RunConfig { bounds: Bounds::new(0.0, 10.0), ..Default::default() };
        assert!(run.validate().is_err());
        let run = RunConfig { num_threads: Some(0), ..Default::default() };
        assert!(run.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: AggregationConfig = serde_json::from_str(r#"{ "d": 50, "factor_a": 1.5 }"#).unwrap();
        assert_eq!(cfg.d, 50);
        assert_eq!(cfg.factor_a, 1.5);
        assert_eq!(cfg.t_leave, 150);

        let run: RunConfig = serde_json::from_str(r#"{ "seed": null, "total_ticks": 10 }"#).unwrap();
        assert_eq!(run.seed, None);
        assert_eq!(run.total_ticks, 10);
        assert_eq!(run.agent_count, 50);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng, resolve_seed};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn streams_differ_for_same_agent() {
        let mut behavior = AgentRng::with_stream(9, AgentId(3), 0);
        let mut movement = AgentRng::with_stream(9, AgentId(3), 0xDEAD_BEEF);
        let a: u64 = behavior.random();
        let b: u64 = movement.random();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn standard_normal_moments() {
        let mut rng = AgentRng::new(7, AgentId(0));
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.standard_normal()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0)); // clamped
    }

    #[test]
    fn configured_seed_is_used_verbatim() {
        assert_eq!(resolve_seed(Some(99)).unwrap(), 99);
    }

    #[test]
    fn entropy_seed_resolves() {
        assert!(resolve_seed(None).is_ok());
    }

    #[test]
    fn sim_rng_children_are_deterministic() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        let x: u64 = a.child(1).random();
        let y: u64 = b.child(1).random();
        assert_eq!(x, y);
        let v: f32 = a.gen_range(0.0..10.0);
        assert!((0.0..10.0).contains(&v));
    }
}
