//! A no-op behavior model — agents never change state.

use agg_core::AgentRng;

use crate::{Agent, BehaviorModel, BehaviorResult, StepOutcome};

/// A [`BehaviorModel`] that leaves every agent untouched.
///
/// Useful in scheduler and recorder tests that only care about the tick loop.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(
        &self,
        agent:       &mut Agent,
        _neighbours: usize,
        _rng:        &mut AgentRng,
    ) -> BehaviorResult<StepOutcome> {
        Ok(StepOutcome::stayed(agent.state))
    }
}
