//! Values handed to observers: per-agent records and per-tick summaries.

use agg_behavior::AgentState;
use agg_core::{AgentId, Position, Tick};

/// One agent at the start of a recorded tick.
///
/// `state` is the state *before* this tick's step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentRecord {
    pub frame:    Tick,
    pub agent:    AgentId,
    pub state:    AgentState,
    pub position: Position,
}

/// Population totals after a tick's step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: Tick,

    /// Agents per state after the step, indexed by [`AgentState::index`].
    pub counts: [usize; 4],

    /// Agents whose state changed this tick.
    pub transitions: usize,
}

impl TickSummary {
    #[inline]
    pub fn count(&self, state: AgentState) -> usize {
        self.counts[state.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
