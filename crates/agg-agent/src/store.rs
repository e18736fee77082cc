//! Core agent storage: `AgentStore` (behavioral state) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The step phase needs `&mut Agent` and `&mut AgentRng` for the same agent
//! at once, and the recorder needs `&AgentStore` between ticks.  Keeping the
//! RNGs in a separate `AgentRngs` lets the scheduler zip the two slices:
//!
//! ```ignore
//! store.agents
//!     .par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .zip(counts.par_iter())
//!     .map(|((agent, rng), &n)| behavior.step(agent, n, rng))
//!     .collect::<Vec<_>>();
//! ```

use agg_behavior::{Agent, AgentState};
use agg_core::{AgentId, AgentRng};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so both can
/// be borrowed mutably side by side.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `root_seed`.
    pub(crate) fn new(count: usize, root_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(root_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// The whole population, indexed by `AgentId`.
///
/// `agents[i].id == AgentId(i)` always holds; agents are never added or
/// removed after the builder returns.
pub struct AgentStore {
    pub agents: Vec<Agent>,
}

impl AgentStore {
    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    /// Number of agents currently in each state, indexed by
    /// [`AgentState::index`].
    pub fn state_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for a in &self.agents {
            counts[a.state.index()] += 1;
        }
        counts
    }

    /// Number of agents in `state`.
    pub fn count_in(&self, state: AgentState) -> usize {
        self.agents.iter().filter(|a| a.state == state).count()
    }

    pub(crate) fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }
}
