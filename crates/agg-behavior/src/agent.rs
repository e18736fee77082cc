//! Per-agent behavioral state.

use agg_core::{AgentId, AgentRng, AggregationConfig};

use crate::AgentState;

/// Inclusive range of the spawn-time popularity score.
pub const POPULARITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// One agent's behavioral state.
///
/// Owned exclusively by its own update: the scheduler hands each `&mut Agent`
/// to exactly one [`BehaviorModel::step`][crate::BehaviorModel::step] call per
/// tick and nothing else writes to it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,

    pub state: AgentState,

    /// Ticks spent in `state` since the last transition.  Stays 0 while
    /// wandering.
    pub counter: u32,

    /// `t_join` plus this agent's own Gaussian jitter, fixed at spawn.
    pub max_join_time: f64,

    /// `t_leave`, fixed.
    pub max_leave_time: f64,

    /// Score in `1..=10` drawn at spawn.  Carried for reporting; the
    /// transition rules do not read it.
    pub popularity: u8,
}

impl Agent {
    /// A wandering agent with explicit thresholds.
    pub fn new(id: AgentId, max_join_time: f64, max_leave_time: f64, popularity: u8) -> Self {
        Self {
            id,
            state: AgentState::Wandering,
            counter: 0,
            max_join_time,
            max_leave_time,
            popularity,
        }
    }

    /// Spawn an agent, drawing its popularity and join-time jitter from its
    /// own RNG (popularity first, then one standard-normal sample).
    ///
    /// A jittered join time that would not be positive is floored at
    /// `f64::MIN_POSITIVE`.
    pub fn spawn(id: AgentId, config: &AggregationConfig, rng: &mut AgentRng) -> Self {
        let popularity = rng.gen_range(POPULARITY_RANGE);
        let noise = rng.standard_normal() * config.join_jitter_std;
        let max_join_time = (f64::from(config.t_join) + noise).max(f64::MIN_POSITIVE);
        Self::new(id, max_join_time, f64::from(config.t_leave), popularity)
    }

    /// Move to `to` and restart the counter.
    #[inline]
    pub(crate) fn transition(&mut self, to: AgentState) {
        self.state = to;
        self.counter = 0;
    }
}
