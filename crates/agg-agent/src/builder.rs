//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use agg_agent::AgentStoreBuilder;
//! use agg_core::AggregationConfig;
//!
//! let (store, rngs) = AgentStoreBuilder::new(50, /*seed=*/ 1)
//!     .build(&AggregationConfig::default());
//!
//! assert_eq!(store.len(), 50);
//! assert_eq!(rngs.len(),  50);
//! ```

use agg_behavior::Agent;
use agg_core::{AgentId, AggregationConfig};

use crate::{AgentRngs, AgentStore};

/// Spawns a population of wandering agents.
///
/// Every agent draws its popularity and join-time jitter from its own RNG
/// stream, so the population is identical for a given seed no matter how
/// many agents are spawned after it.
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the root RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Spawn the agents.  The returned RNGs have already been advanced past
    /// the spawn draws.
    pub fn build(self, config: &AggregationConfig) -> (AgentStore, AgentRngs) {
        let mut rngs = AgentRngs::new(self.count, self.seed);
        let agents = rngs
            .inner
            .iter_mut()
            .enumerate()
            .map(|(i, rng)| Agent::spawn(AgentId(i as u32), config, rng))
            .collect();

        (AgentStore::new(agents), rngs)
    }
}
