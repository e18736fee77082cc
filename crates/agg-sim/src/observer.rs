//! Simulation observer trait for progress reporting and data collection.

use agg_core::Tick;

use crate::{AgentRecord, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — still-agent printer
///
/// ```rust,ignore
/// struct StillPrinter { interval: u64 }
///
/// impl SimObserver for StillPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} still", summary.count(AgentState::Still));
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called on recorded ticks (every `output_interval_ticks`) with one record
    /// per agent, in ascending `AgentId` order.  States are pre-update.
    fn on_records(&mut self, _frame: Tick, _records: &[AgentRecord]) {}

    /// Called at the end of each tick, after movement.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns normally, with
    /// the first tick that was not simulated.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
