//! The `Sim` struct and its tick loop.

use agg_behavior::{AgentState, BehaviorModel, StepOutcome};
use agg_core::{AgentId, Tick};
use agg_mobility::MovementModel;
use agg_spatial::{PositionSnapshot, ProximityQuery};
use tracing::{debug, info, warn};

use crate::{AgentRecord, SimError, SimObserver, SimResult, SimulationRun, StopHandle, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B, M>` owns a [`SimulationRun`] and drives the tick loop described
/// in the crate docs.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel, M: MovementModel> {
    /// All run state: configs, agents, RNGs, movement, behavior, clock.
    pub state: SimulationRun<B, M>,

    pub(crate) stop: StopHandle,

    /// Dedicated worker pool when `num_threads` is set; otherwise Rayon's
    /// global pool.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<B: BehaviorModel, M: MovementModel> Sim<B, M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// A clone of this run's stop flag.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run from the current tick to `config.end_tick()`, or until the stop
    /// flag is raised.  The flag is checked between ticks only.
    ///
    /// Any step error aborts the run immediately; `on_sim_end` is then not
    /// called.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.state.config.end_tick();
        info!(
            agents = self.state.agents.len(),
            ticks = self.state.config.total_ticks,
            seed = self.state.seed,
            "aggregation run starting"
        );

        while self.state.clock.current_tick < end {
            if self.stop.is_stopped() {
                warn!(tick = self.state.clock.current_tick.0, "stop requested; ending run early");
                break;
            }
            self.tick(observer)?;
        }

        let final_tick = self.state.clock.current_tick;
        observer.on_sim_end(final_tick);
        info!(
            final_tick = final_tick.0,
            still = self.state.agents.count_in(AgentState::Still),
            "aggregation run finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and the stop flag; never calls `on_sim_end`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.state.clock.current_tick;
        observer.on_tick_start(now);

        let summary = self.process_tick(now, observer)?;
        debug!(
            tick = now.0,
            wandering = summary.count(AgentState::Wandering),
            joining = summary.count(AgentState::Joining),
            still = summary.count(AgentState::Still),
            leaving = summary.count(AgentState::Leaving),
            transitions = summary.transitions,
            "tick complete"
        );
        observer.on_tick_end(now, &summary);

        self.state.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        // ── Phase 1: freeze positions ─────────────────────────────────────
        //
        // Every count this tick comes from this snapshot; nothing moves until
        // phase 6.
        let positions = self.state.mobility.positions();
        let snapshot = PositionSnapshot::new(&positions);

        // ── Phase 2: record pre-update state ──────────────────────────────
        if now.is_multiple_of(self.state.config.output_interval_ticks) {
            let records: Vec<AgentRecord> = self
                .state
                .agents
                .agents
                .iter()
                .zip(&positions)
                .map(|(agent, &position)| AgentRecord {
                    frame: now,
                    agent: agent.id,
                    state: agent.state,
                    position,
                })
                .collect();
            observer.on_records(now, &records);
        }

        // ── Phase 3: neighbour counts ─────────────────────────────────────
        let counts = self.neighbour_counts(&snapshot)?;

        // ── Phase 4: step every agent exactly once ────────────────────────
        let outcomes = self.step_agents(&counts)?;

        // ── Phase 5: movement signals, ascending AgentId ──────────────────
        let mut transitions = 0;
        for (i, outcome) in outcomes.iter().enumerate() {
            if outcome.transitioned() {
                transitions += 1;
            }
            if let Some(signal) = outcome.signal {
                self.state.mobility.apply(AgentId(i as u32), signal)?;
            }
        }

        // ── Phase 6: move ─────────────────────────────────────────────────
        self.state.mobility.advance();

        Ok(TickSummary {
            tick: now,
            counts: self.state.agents.state_counts(),
            transitions,
        })
    }

    /// Neighbour count for every agent, in `AgentId` order.
    fn neighbour_counts(&self, snapshot: &PositionSnapshot) -> SimResult<Vec<usize>> {
        let radius = self.state.aggregation.sensing_radius;
        let n = self.state.agents.len() as u32;

        #[cfg(not(feature = "parallel"))]
        {
            (0..n)
                .map(|i| snapshot.neighbour_count(AgentId(i), radius).map_err(SimError::from))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let work = || {
                (0..n)
                    .into_par_iter()
                    .map(|i| snapshot.neighbour_count(AgentId(i), radius).map_err(SimError::from))
                    .collect::<SimResult<Vec<usize>>>()
            };
            match &self.pool {
                Some(pool) => pool.install(work),
                None => work(),
            }
        }
    }

    /// Call `BehaviorModel::step` once per agent.
    ///
    /// With the `parallel` feature the agents, their RNGs, and their counts
    /// are zipped and stepped on Rayon's pool.  Each agent touches only its
    /// own RNG, so the result is the same as the sequential loop.
    fn step_agents(&mut self, counts: &[usize]) -> SimResult<Vec<StepOutcome>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let SimulationRun { agents, rngs, behavior, .. } = &mut self.state;
        let agents = &mut agents.agents;
        let rngs = &mut rngs.inner;
        let behavior = &*behavior;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .zip(rngs.iter_mut())
                .zip(counts)
                .map(|((agent, rng), &n)| {
                    behavior
                        .step(agent, n, rng)
                        .map_err(|source| SimError::Behavior { agent: agent.id, source })
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut work = || {
                agents
                    .par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .zip(counts.par_iter())
                    .map(|((agent, rng), &n)| {
                        behavior
                            .step(agent, n, rng)
                            .map_err(|source| SimError::Behavior { agent: agent.id, source })
                    })
                    .collect::<SimResult<Vec<StepOutcome>>>()
            };
            match &self.pool {
                Some(pool) => pool.install(work),
                None => work(),
            }
        }
    }
}
