//! Unit tests for agg-behavior.

use agg_core::{AgentId, AgentRng, AggregationConfig, SimRng};

use crate::{
    Agent, AgentState, AggregationBehavior, BehaviorError, BehaviorModel, MovementSignal,
    NoopBehavior,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn behavior() -> AggregationBehavior {
    AggregationBehavior::new(&AggregationConfig::default()).unwrap()
}

fn behavior_with_d(d: u32) -> AggregationBehavior {
    AggregationBehavior::new(&AggregationConfig { d, ..Default::default() }).unwrap()
}

/// Agent with zero jitter: max_join_time = 50, max_leave_time = 150.
fn agent_in(state: AgentState, counter: u32) -> Agent {
    let mut a = Agent::new(AgentId(0), 50.0, 150.0, 5);
    a.state = state;
    a.counter = counter;
    a
}

fn rng() -> AgentRng {
    AgentRng::new(42, AgentId(0))
}

/// `true` if `after` has consumed no draws relative to `before`.
fn no_draw_between(before: &AgentRng, after: &AgentRng) -> bool {
    let mut a = before.clone();
    let mut b = after.clone();
    a.uniform() == b.uniform()
}

// ── Probability model ─────────────────────────────────────────────────────────

#[cfg(test)]
mod probability_tests {
    use crate::probability::{clamp_for_test, join_probability, leave_probability};
    use crate::{bernoulli, BehaviorError};

    use super::rng;

    #[test]
    fn join_base_with_no_neighbours() {
        for a in [0.1, 1.0, 2.6, 10.0] {
            assert_eq!(join_probability(0, a).unwrap(), 0.03);
        }
    }

    #[test]
    fn join_saturates_toward_051() {
        let p = join_probability(1_000, 2.6).unwrap();
        assert!((p - 0.51).abs() < 1e-12, "got {p}");
        assert!(p <= 0.51);
    }

    #[test]
    fn join_strictly_increasing() {
        let a = 0.3;
        let mut prev = join_probability(0, a).unwrap();
        for n in 1..40 {
            let p = join_probability(n, a).unwrap();
            assert!(p > prev, "n={n}: {p} <= {prev}");
            prev = p;
        }
    }

    #[test]
    fn join_reference_value() {
        // 0.48 · (1 − e^−7.8) ≈ 0.4798, on top of the 0.03 base.
        let p = join_probability(3, 2.6).unwrap();
        let expected = 0.03 + 0.48 * (1.0 - (-7.8f64).exp());
        assert!((p - expected).abs() < 1e-12);
        assert!((p - 0.03 - 0.4798).abs() < 1e-4, "got {p}");
    }

    #[test]
    fn leave_is_exactly_one_with_no_neighbours() {
        assert_eq!(leave_probability(0, 2.2).unwrap(), 1.0);
        assert_eq!(leave_probability(0, 0.01).unwrap(), 1.0);
    }

    #[test]
    fn leave_strictly_decreasing_toward_zero() {
        let b = 0.2;
        let mut prev = leave_probability(0, b).unwrap();
        for n in 1..40 {
            let p = leave_probability(n, b).unwrap();
            assert!(p < prev && p > 0.0, "n={n}: {p}");
            prev = p;
        }
        assert!(leave_probability(500, 2.2).unwrap() < 1e-100);
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(
            join_probability(-1, 2.6),
            Err(BehaviorError::InvalidNeighborCount(-1))
        ));
        assert!(matches!(
            leave_probability(-3, 2.2),
            Err(BehaviorError::InvalidNeighborCount(-3))
        ));
    }

    #[test]
    fn out_of_range_probabilities_are_clamped() {
        assert_eq!(clamp_for_test(1.2), 1.0);
        assert_eq!(clamp_for_test(-0.5), 0.0);
        assert_eq!(clamp_for_test(f64::NAN), 0.0);
        assert_eq!(clamp_for_test(0.25), 0.25);
    }

    #[test]
    fn bernoulli_extremes() {
        let mut r = rng();
        for _ in 0..1_000 {
            assert!(bernoulli(1.0, &mut r));
            assert!(!bernoulli(0.0, &mut r));
        }
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for s in AgentState::ALL {
            assert_eq!(s.as_str().parse::<AgentState>().unwrap(), s);
            assert_eq!(s.to_string(), s.as_str());
        }
    }

    #[test]
    fn unknown_label_is_invalid_state() {
        let err = "sleeping".parse::<AgentState>().unwrap_err();
        assert!(matches!(err, BehaviorError::InvalidState(ref s) if s == "sleeping"));
    }

    #[test]
    fn successor_cycle() {
        let mut s = AgentState::Wandering;
        for expected in [
            AgentState::Joining,
            AgentState::Still,
            AgentState::Leaving,
            AgentState::Wandering,
        ] {
            s = s.successor();
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn indices_follow_all() {
        for (i, s) in AgentState::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}

// ── Agent spawn ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn spawn_starts_wandering_with_jittered_join_time() {
        let cfg = AggregationConfig::default();
        let mut r = rng();
        let a = Agent::spawn(AgentId(3), &cfg, &mut r);
        assert_eq!(a.id, AgentId(3));
        assert_eq!(a.state, AgentState::Wandering);
        assert_eq!(a.counter, 0);
        assert!((1..=10).contains(&a.popularity));
        assert_eq!(a.max_leave_time, 150.0);
        assert!((a.max_join_time - 50.0).abs() < 6.0, "got {}", a.max_join_time);
    }

    #[test]
    fn zero_jitter_gives_exact_join_time() {
        let cfg = AggregationConfig { join_jitter_std: 0.0, ..Default::default() };
        let a = Agent::spawn(AgentId(0), &cfg, &mut rng());
        assert_eq!(a.max_join_time, 50.0);
    }

    #[test]
    fn jitter_differs_across_agents() {
        let cfg = AggregationConfig::default();
        let a = Agent::spawn(AgentId(0), &cfg, &mut AgentRng::new(1, AgentId(0)));
        let b = Agent::spawn(AgentId(1), &cfg, &mut AgentRng::new(1, AgentId(1)));
        assert_ne!(a.max_join_time, b.max_join_time);
    }

    #[test]
    fn join_time_stays_positive_under_huge_jitter() {
        let cfg = AggregationConfig { t_join: 1, join_jitter_std: 1_000.0, ..Default::default() };
        for i in 0..200 {
            let a = Agent::spawn(AgentId(i), &cfg, &mut AgentRng::new(5, AgentId(i)));
            assert!(a.max_join_time > 0.0);
        }
    }

    #[test]
    fn popularity_covers_its_range() {
        let cfg = AggregationConfig::default();
        let mut seen = [false; 11];
        for i in 0..500 {
            let a = Agent::spawn(AgentId(i), &cfg, &mut AgentRng::new(8, AgentId(i)));
            seen[a.popularity as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine_tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = AggregationConfig { d: 0, ..Default::default() };
        assert!(matches!(AggregationBehavior::new(&cfg), Err(BehaviorError::Config(_))));
    }

    #[test]
    fn wandering_counter_stays_zero() {
        let b = behavior();
        let mut a = agent_in(AgentState::Wandering, 0);
        let mut r = rng();
        // p = 0.03: the first handful of draws are overwhelmingly failures.
        for _ in 0..5 {
            let out = b.step(&mut a, 0, &mut r).unwrap();
            if out.transitioned() {
                break;
            }
            assert_eq!(a.counter, 0);
        }
    }

    #[test]
    fn wandering_draws_once_per_tick() {
        let b = behavior();
        let mut a = agent_in(AgentState::Wandering, 0);
        let mut r = rng();
        let mut expected = r.clone();
        let _ = expected.uniform();
        b.step(&mut a, 0, &mut r).unwrap();
        assert!(no_draw_between(&expected, &r));
    }

    #[test]
    fn join_timer_boundary() {
        let b = behavior();
        let mut a = agent_in(AgentState::Joining, 50);
        let mut r = rng();

        let out = b.step(&mut a, 0, &mut r).unwrap();
        assert!(!out.transitioned());
        assert_eq!(out.signal, None);
        assert_eq!(a.state, AgentState::Joining);
        assert_eq!(a.counter, 51);

        let out = b.step(&mut a, 0, &mut r).unwrap();
        assert_eq!(out.from, AgentState::Joining);
        assert_eq!(out.to, AgentState::Still);
        assert_eq!(out.signal, Some(MovementSignal::Freeze));
        assert_eq!(a.counter, 0);
    }

    #[test]
    fn freeze_emitted_exactly_once_per_join() {
        let b = behavior();
        let mut a = agent_in(AgentState::Joining, 0);
        // Many neighbours: leave probability is effectively 0, agent stays still.
        let mut r = rng();
        let freezes = (0..200)
            .filter_map(|_| b.step(&mut a, 50, &mut r).unwrap().signal)
            .filter(|s| *s == MovementSignal::Freeze)
            .count();
        assert_eq!(freezes, 1);
        assert_eq!(a.state, AgentState::Still);
    }

    #[test]
    fn joining_draws_nothing() {
        let b = behavior();
        let mut a = agent_in(AgentState::Joining, 3);
        let mut r = rng();
        let before = r.clone();
        b.step(&mut a, 2, &mut r).unwrap();
        assert!(no_draw_between(&before, &r));
    }

    #[test]
    fn leave_only_evaluated_on_check_ticks() {
        let b = behavior_with_d(50);
        // leave(0) = 1, so any evaluation would succeed.
        for counter in [49, 51, 99, 1] {
            let mut a = agent_in(AgentState::Still, counter);
            let mut r = rng();
            let before = r.clone();
            let out = b.step(&mut a, 0, &mut r).unwrap();
            assert!(!out.transitioned(), "counter {counter}");
            assert_eq!(a.counter, counter + 1);
            assert!(no_draw_between(&before, &r), "drew at counter {counter}");
        }
        for counter in [0, 50, 100] {
            let mut a = agent_in(AgentState::Still, counter);
            let out = b.step(&mut a, 0, &mut rng()).unwrap();
            assert_eq!(out.to, AgentState::Leaving, "counter {counter}");
            assert_eq!(out.signal, Some(MovementSignal::Resume));
            assert_eq!(a.counter, 0);
        }
    }

    #[test]
    fn still_walks_through_check_ticks_when_crowded() {
        let b = behavior_with_d(20);
        let mut a = agent_in(AgentState::Still, 0);
        let mut r = rng();
        // leave(60) = e^-132: never succeeds.
        for _ in 0..100 {
            assert!(!b.step(&mut a, 60, &mut r).unwrap().transitioned());
        }
        assert_eq!(a.counter, 100);
    }

    #[test]
    fn leave_timer_boundary() {
        let b = behavior();
        let mut a = agent_in(AgentState::Leaving, 150);
        let out = b.step(&mut a, 0, &mut rng()).unwrap();
        assert!(!out.transitioned());
        assert_eq!(a.counter, 151);

        let out = b.step(&mut a, 0, &mut rng()).unwrap();
        assert_eq!(out.to, AgentState::Wandering);
        assert_eq!(out.signal, None);
        assert_eq!(a.counter, 0);
    }

    #[test]
    fn states_visit_cycle_in_order() {
        let cfg = AggregationConfig { d: 3, t_join: 4, t_leave: 5, ..Default::default() };
        let b = AggregationBehavior::new(&cfg).unwrap();
        let mut r = AgentRng::new(11, AgentId(0));
        let mut a = Agent::spawn(AgentId(0), &cfg, &mut r);
        let mut counts = SimRng::new(3);
        let mut visited = [0usize; 4];

        for _ in 0..20_000 {
            let n: usize = counts.gen_range(0..6);
            let out = b.step(&mut a, n, &mut r).unwrap();
            if out.transitioned() {
                assert_eq!(out.to, out.from.successor());
                visited[out.to.index()] += 1;
            }
            assert_eq!(out.to, a.state);
        }
        assert!(visited.iter().all(|&v| v > 0), "{visited:?}");
    }

    #[test]
    fn signals_match_transitions() {
        let cfg = AggregationConfig { d: 2, t_join: 2, t_leave: 2, ..Default::default() };
        let b = AggregationBehavior::new(&cfg).unwrap();
        let mut r = AgentRng::new(4, AgentId(0));
        let mut a = Agent::spawn(AgentId(0), &cfg, &mut r);
        for _ in 0..5_000 {
            let out = b.step(&mut a, 1, &mut r).unwrap();
            match (out.from, out.to) {
                (AgentState::Joining, AgentState::Still) => {
                    assert_eq!(out.signal, Some(MovementSignal::Freeze));
                }
                (AgentState::Still, AgentState::Leaving) => {
                    assert_eq!(out.signal, Some(MovementSignal::Resume));
                }
                _ => assert_eq!(out.signal, None),
            }
        }
    }

    #[test]
    fn wandering_wait_is_geometric() {
        // n = 0 ⇒ p = 0.03 ⇒ expected ticks until joining = 1/p ≈ 33.3.
        let b = behavior();
        let trials = 4_000u32;
        let mut total = 0u64;
        for t in 0..trials {
            let mut a = agent_in(AgentState::Wandering, 0);
            let mut r = AgentRng::new(2024, AgentId(t));
            let mut ticks = 0u64;
            loop {
                ticks += 1;
                if b.step(&mut a, 0, &mut r).unwrap().transitioned() {
                    break;
                }
            }
            total += ticks;
        }
        let mean = total as f64 / trials as f64;
        let expected = 1.0 / 0.03;
        assert!((mean - expected).abs() < 3.0, "mean {mean}, expected {expected}");
    }

    #[test]
    fn same_seed_same_trajectory() {
        let cfg = AggregationConfig::default();
        let b = behavior();
        let run = || {
            let mut r = AgentRng::new(77, AgentId(9));
            let mut a = Agent::spawn(AgentId(9), &cfg, &mut r);
            (0..3_000)
                .map(|i| b.step(&mut a, i % 4, &mut r).unwrap().to)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn noop_never_changes_agent() {
        let mut a = agent_in(AgentState::Joining, 7);
        let before = a.clone();
        let out = NoopBehavior.step(&mut a, 3, &mut rng()).unwrap();
        assert!(!out.transitioned());
        assert_eq!(a, before);
    }
}
