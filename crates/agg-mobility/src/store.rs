//! The `MobilityStore` — double-buffered movement state and frozen flags.

use agg_core::{AgentId, Position};

use crate::{MobilityError, MobilityResult, MovementState};

/// Holds movement state for every agent, indexed by `AgentId`.
///
/// `states` is the read buffer for the current tick.  `next` is scratch
/// space that [`MobilityEngine::advance`][crate::MobilityEngine::advance]
/// writes into before the two are swapped.
pub struct MobilityStore {
    /// Current per-agent movement state.
    pub states: Vec<MovementState>,

    /// `true` while an agent has been frozen by its state machine.
    pub frozen: Vec<bool>,

    next: Vec<MovementState>,
}

impl MobilityStore {
    /// Create a store from initial states; nobody starts frozen.
    pub fn new(states: Vec<MovementState>) -> Self {
        let n = states.len();
        Self {
            next: states.clone(),
            states,
            frozen: vec![false; n],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Current position of every agent, indexed by `AgentId`.
    pub fn positions(&self) -> Vec<Position> {
        self.states.iter().map(|s| s.position).collect()
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Position> {
        self.states.get(agent.index()).map(|s| s.position)
    }

    #[inline]
    pub fn is_frozen(&self, agent: AgentId) -> bool {
        self.frozen.get(agent.index()).copied().unwrap_or(false)
    }

    /// Set the frozen flag for `agent`.
    pub fn set_frozen(&mut self, agent: AgentId, frozen: bool) -> MobilityResult<()> {
        let slot = self
            .frozen
            .get_mut(agent.index())
            .ok_or(MobilityError::AgentOutOfRange(agent))?;
        *slot = frozen;
        Ok(())
    }

    /// Split borrow: current states, frozen flags, and the write buffer.
    pub(crate) fn buffers(&mut self) -> (&[MovementState], &[bool], &mut [MovementState]) {
        (&self.states, &self.frozen, &mut self.next)
    }

    /// Promote the write buffer to current.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.states, &mut self.next);
    }
}
