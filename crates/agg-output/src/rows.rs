//! Plain data row types written by output backends.

use agg_behavior::AgentState;
use agg_sim::{AgentRecord, TickSummary};

/// One agent at one recorded tick.  `state` is pre-update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentRecordRow {
    pub frame:    u64,
    pub agent_id: u32,
    pub state:    AgentState,
    pub x:        f32,
    pub y:        f32,
}

impl From<&AgentRecord> for AgentRecordRow {
    fn from(r: &AgentRecord) -> Self {
        Self {
            frame:    r.frame.0,
            agent_id: r.agent.0,
            state:    r.state,
            x:        r.position.x,
            y:        r.position.y,
        }
    }
}

/// Per-state population after one tick, plus the number of transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub frame:       u64,
    pub wandering:   u64,
    pub joining:     u64,
    pub still:       u64,
    pub leaving:     u64,
    pub transitions: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        let n = |state: AgentState| s.count(state) as u64;
        Self {
            frame:       s.tick.0,
            wandering:   n(AgentState::Wandering),
            joining:     n(AgentState::Joining),
            still:       n(AgentState::Still),
            leaving:     n(AgentState::Leaving),
            transitions: s.transitions as u64,
        }
    }
}
