//! `SimulationRun` — every piece of mutable state one run owns.

use agg_agent::{AgentRngs, AgentStore};
use agg_behavior::BehaviorModel;
use agg_core::{AggregationConfig, RunConfig, SimClock};
use agg_mobility::{MobilityEngine, MovementModel};

/// The complete state of one run.  Nothing outside this value is read or
/// written by the tick loop.
///
/// The run holds no recorder.  Records and summaries go to the
/// [`SimObserver`](crate::SimObserver) passed to [`Sim::run`](crate::Sim::run),
/// so the same run can feed any writer or none.
pub struct SimulationRun<B: BehaviorModel, M: MovementModel> {
    /// Parameters of the behavioral rule.
    pub aggregation: AggregationConfig,

    /// Population size, duration, window, output cadence.
    pub config: RunConfig,

    /// Root seed actually used (resolved from entropy when `config.seed` is
    /// `None`).  Re-running with `Some(seed)` reproduces the run.
    pub seed: u64,

    pub agents: AgentStore,

    /// Per-agent behavior RNGs, kept apart from `agents` for the split
    /// borrow in the step phase.
    pub rngs: AgentRngs,

    pub mobility: MobilityEngine<M>,

    pub behavior: B,

    pub clock: SimClock,
}
