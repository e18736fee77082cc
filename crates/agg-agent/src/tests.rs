//! Unit tests for agg-agent.

#[cfg(test)]
mod builder {
    use agg_behavior::AgentState;
    use agg_core::{AgentId, AggregationConfig};

    use crate::AgentStoreBuilder;

    #[test]
    fn correct_count() {
        let (store, rngs) = AgentStoreBuilder::new(500, 1).build(&AggregationConfig::default());
        assert_eq!(store.len(), 500);
        assert_eq!(rngs.len(), 500);
    }

    #[test]
    fn zero_agents() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build(&AggregationConfig::default());
        assert!(store.is_empty());
        assert!(rngs.is_empty());
    }

    #[test]
    fn ids_match_indices_and_all_wander() {
        let (store, _) = AgentStoreBuilder::new(20, 3).build(&AggregationConfig::default());
        for (i, a) in store.agents.iter().enumerate() {
            assert_eq!(a.id, AgentId(i as u32));
            assert_eq!(a.state, AgentState::Wandering);
            assert_eq!(a.counter, 0);
        }
        assert_eq!(store.state_counts(), [20, 0, 0, 0]);
    }

    #[test]
    fn same_seed_same_population() {
        let cfg = AggregationConfig::default();
        let (a, _) = AgentStoreBuilder::new(30, 9).build(&cfg);
        let (b, _) = AgentStoreBuilder::new(30, 9).build(&cfg);
        assert_eq!(a.agents, b.agents);
    }

    #[test]
    fn growing_population_keeps_existing_agents() {
        let cfg = AggregationConfig::default();
        let (small, _) = AgentStoreBuilder::new(10, 9).build(&cfg);
        let (large, _) = AgentStoreBuilder::new(40, 9).build(&cfg);
        assert_eq!(small.agents[..], large.agents[..10]);
    }

    #[test]
    fn thresholds_are_independently_jittered() {
        let (store, _) = AgentStoreBuilder::new(100, 2).build(&AggregationConfig::default());
        let first = store.agents[0].max_join_time;
        assert!(store.agents.iter().any(|a| a.max_join_time != first));
        assert!(store.agents.iter().all(|a| a.max_leave_time == 150.0));
        let mean = store.agents.iter().map(|a| a.max_join_time).sum::<f64>() / 100.0;
        assert!((mean - 50.0).abs() < 0.5, "mean {mean}");
    }
}

#[cfg(test)]
mod store {
    use agg_behavior::AgentState;
    use agg_core::{AgentId, AggregationConfig};

    use crate::AgentStoreBuilder;

    #[test]
    fn agent_ids_iterator() {
        let (store, _) = AgentStoreBuilder::new(5, 0).build(&AggregationConfig::default());
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let (mut store, _) = AgentStoreBuilder::new(2, 0).build(&AggregationConfig::default());
        assert!(store.get(AgentId(2)).is_none());
        assert!(store.get_mut(AgentId(7)).is_none());
    }

    #[test]
    fn state_counts_track_writes() {
        let (mut store, _) = AgentStoreBuilder::new(4, 0).build(&AggregationConfig::default());
        store.agents[1].state = AgentState::Still;
        store.agents[2].state = AgentState::Still;
        store.agents[3].state = AgentState::Leaving;
        assert_eq!(store.state_counts(), [1, 0, 2, 1]);
        assert_eq!(store.count_in(AgentState::Still), 2);
    }

    #[test]
    fn rng_get_mut_is_per_agent() {
        let (_, mut rngs) = AgentStoreBuilder::new(3, 0).build(&AggregationConfig::default());
        let a: u64 = rngs.get_mut(AgentId(0)).random();
        let b: u64 = rngs.get_mut(AgentId(1)).random();
        assert_ne!(a, b);
    }
}
