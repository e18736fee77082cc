//! Fluent builder for constructing a [`Sim`].

use agg_agent::AgentStoreBuilder;
use agg_behavior::BehaviorModel;
use agg_core::{AggregationConfig, Position, RunConfig, SimClock, resolve_seed};
use agg_mobility::{MobilityEngine, MovementModel};
use tracing::debug;

use crate::{Sim, SimError, SimResult, SimulationRun, StopHandle};

/// Fluent builder for [`Sim<B, M>`].
///
/// # Required inputs
///
/// - [`AggregationConfig`] — D, factor_a/b, dwell times, sensing radius
/// - [`RunConfig`] — agent count, ticks, seed, window, output cadence
/// - `B: BehaviorModel` — usually [`agg_behavior::AggregationBehavior`]
/// - `M: MovementModel` — e.g. [`agg_mobility::RandomWalk`]
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                    |
/// |--------------------------|--------------------------------------------|
/// | `.initial_positions(v)`  | Uniform scatter inside `RunConfig::bounds` |
/// | `.stop_handle(h)`        | A fresh, unraised `StopHandle`             |
pub struct SimBuilder<B: BehaviorModel, M: MovementModel> {
    aggregation: AggregationConfig,
    config:      RunConfig,
    behavior:    B,
    movement:    M,
    positions:   Option<Vec<Position>>,
    stop:        Option<StopHandle>,
}

impl<B: BehaviorModel, M: MovementModel> SimBuilder<B, M> {
    pub fn new(aggregation: AggregationConfig, config: RunConfig, behavior: B, movement: M) -> Self {
        Self {
            aggregation,
            config,
            behavior,
            movement,
            positions: None,
            stop:      None,
        }
    }

    /// Supply each agent's starting position (must be length `agent_count`,
    /// every point inside the bounds).
    pub fn initial_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Share an existing stop flag with the built `Sim`.
    pub fn stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Validate both configs, resolve the root seed, spawn the population,
    /// place agents, and return a ready-to-run [`Sim`].
    ///
    /// Nothing is simulated here: any configuration error surfaces before
    /// tick 0.
    pub fn build(self) -> SimResult<Sim<B, M>> {
        self.aggregation.validate()?;
        self.config.validate()?;

        let seed = resolve_seed(self.config.seed)?;
        let agent_count = self.config.agent_count;
        debug!(seed, agent_count, "building simulation");

        let (agents, rngs) = AgentStoreBuilder::new(agent_count, seed).build(&self.aggregation);

        let bounds = self.config.bounds;
        let mobility = match self.positions {
            Some(p) => {
                if p.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                MobilityEngine::with_positions(self.movement, &p, bounds, seed)?
            }
            None => MobilityEngine::scatter(self.movement, agent_count, bounds, seed),
        };

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Sim {
            state: SimulationRun {
                aggregation: self.aggregation,
                config:      self.config,
                seed,
                agents,
                rngs,
                mobility,
                behavior:    self.behavior,
                clock:       SimClock::new(),
            },
            stop: self.stop.unwrap_or_default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
