//! The closed set of behavioral states.

use std::fmt;
use std::str::FromStr;

use crate::BehaviorError;

/// Where an agent is in the aggregation cycle.
///
/// The only legal order is `Wandering → Joining → Still → Leaving →
/// Wandering`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentState {
    /// Mobile, not affiliated with any aggregate.  Initial state.
    #[default]
    Wandering,
    /// Decided to aggregate; still mobile while the join timer runs.
    Joining,
    /// Part of an aggregate; movement frozen.
    Still,
    /// Decided to leave; mobile again while the leave timer runs.
    Leaving,
}

impl AgentState {
    /// All states in cycle order.
    pub const ALL: [AgentState; 4] = [
        AgentState::Wandering,
        AgentState::Joining,
        AgentState::Still,
        AgentState::Leaving,
    ];

    /// Position in [`ALL`](Self::ALL); handy for per-state counters.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            AgentState::Wandering => 0,
            AgentState::Joining   => 1,
            AgentState::Still     => 2,
            AgentState::Leaving   => 3,
        }
    }

    /// The only state this one may transition to.
    #[inline]
    pub fn successor(self) -> AgentState {
        match self {
            AgentState::Wandering => AgentState::Joining,
            AgentState::Joining   => AgentState::Still,
            AgentState::Still     => AgentState::Leaving,
            AgentState::Leaving   => AgentState::Wandering,
        }
    }

    /// Lowercase label used in record files.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Wandering => "wandering",
            AgentState::Joining   => "joining",
            AgentState::Still     => "still",
            AgentState::Leaving   => "leaving",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentState {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wandering" => Ok(AgentState::Wandering),
            "joining"   => Ok(AgentState::Joining),
            "still"     => Ok(AgentState::Still),
            "leaving"   => Ok(AgentState::Leaving),
            other       => Err(BehaviorError::InvalidState(other.to_owned())),
        }
    }
}
