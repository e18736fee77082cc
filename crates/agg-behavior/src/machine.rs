//! The aggregation transition table.
//!
//! | From      | Condition                                   | To        | Signal   |
//! |-----------|---------------------------------------------|-----------|----------|
//! | Wandering | Bernoulli(join(n))                          | Joining   | —        |
//! | Joining   | counter > max_join_time                     | Still     | `Freeze` |
//! | Still     | counter % D == 0 && Bernoulli(leave(n))     | Leaving   | `Resume` |
//! | Leaving   | counter > max_leave_time                    | Wandering | —        |
//!
//! Conditions read the counter as it stood at the start of the tick.  Every
//! transition resets the counter to 0; otherwise it grows by one in
//! `Joining`, `Still` and `Leaving` and stays at 0 in `Wandering`.

use agg_core::{AgentRng, AggregationConfig};

use crate::probability::{bernoulli, join_probability, leave_probability};
use crate::{Agent, AgentState, BehaviorModel, BehaviorResult, MovementSignal, StepOutcome};

/// The density-driven aggregation rule.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregationBehavior {
    d:        u32,
    factor_a: f64,
    factor_b: f64,
}

impl AggregationBehavior {
    /// Build from a run configuration.
    ///
    /// # Errors
    ///
    /// [`BehaviorError::Config`][crate::BehaviorError::Config] if the
    /// configuration fails validation.
    pub fn new(config: &AggregationConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self {
            d:        config.d,
            factor_a: config.factor_a,
            factor_b: config.factor_b,
        })
    }

    /// Leave-check interval.
    #[inline]
    pub fn d(&self) -> u32 {
        self.d
    }

    /// `true` if a still agent with this counter gets a leave draw this tick.
    #[inline]
    pub fn is_leave_check(&self, counter: u32) -> bool {
        counter % self.d == 0
    }
}

impl BehaviorModel for AggregationBehavior {
    fn step(
        &self,
        agent:      &mut Agent,
        neighbours: usize,
        rng:        &mut AgentRng,
    ) -> BehaviorResult<StepOutcome> {
        let n = i64::try_from(neighbours).unwrap_or(i64::MAX);
        let from = agent.state;

        let fired = match from {
            AgentState::Wandering => bernoulli(join_probability(n, self.factor_a)?, rng),
            AgentState::Joining => f64::from(agent.counter) > agent.max_join_time,
            AgentState::Still => {
                // The draw only happens on check ticks.
                self.is_leave_check(agent.counter)
                    && bernoulli(leave_probability(n, self.factor_b)?, rng)
            }
            AgentState::Leaving => f64::from(agent.counter) > agent.max_leave_time,
        };

        if !fired {
            if from != AgentState::Wandering {
                agent.counter = agent.counter.saturating_add(1);
            }
            return Ok(StepOutcome::stayed(from));
        }

        let to = from.successor();
        agent.transition(to);
        let signal = match to {
            AgentState::Still   => Some(MovementSignal::Freeze),
            AgentState::Leaving => Some(MovementSignal::Resume),
            AgentState::Wandering | AgentState::Joining => None,
        };
        Ok(StepOutcome { from, to, signal })
    }
}
