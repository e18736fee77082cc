//! The `BehaviorModel` trait — the extension point driven by the scheduler.

use agg_core::AgentRng;

use crate::{Agent, AgentState, BehaviorResult, MovementSignal};

/// What happened to one agent during one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// State at the start of the step.
    pub from: AgentState,
    /// State after the step.  Equal to `from` when nothing fired.
    pub to: AgentState,
    /// Movement request for the scheduler, if this transition carries one.
    pub signal: Option<MovementSignal>,
}

impl StepOutcome {
    /// An outcome where the agent stayed in `state`.
    #[inline]
    pub fn stayed(state: AgentState) -> Self {
        Self { from: state, to: state, signal: None }
    }

    #[inline]
    pub fn transitioned(&self) -> bool {
        self.from != self.to
    }
}

/// Pluggable per-agent update rule.
///
/// # Thread safety
///
/// The scheduler may call `step` for many agents in parallel via Rayon, so
/// implementations must be `Send + Sync` and keep per-agent state in the
/// [`Agent`] they are handed, not in the model.
pub trait BehaviorModel: Send + Sync + 'static {
    /// Advance `agent` by one tick.
    ///
    /// `neighbours` is the number of other agents inside the sensing radius,
    /// taken from the snapshot frozen at the start of this tick.  All random
    /// draws must come from `rng`.
    fn step(
        &self,
        agent:      &mut Agent,
        neighbours: usize,
        rng:        &mut AgentRng,
    ) -> BehaviorResult<StepOutcome>;
}
