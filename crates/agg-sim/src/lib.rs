//! `agg-sim` — tick scheduler for the rust_aggregation workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..run_config.total_ticks (or until the StopHandle is raised):
//!   ① Snapshot  — freeze every agent's position into a PositionSnapshot.
//!   ② Record    — every `output_interval_ticks`, hand one AgentRecord per
//!                 agent (pre-update state) to SimObserver::on_records.
//!   ③ Sense     — neighbour count per agent from the snapshot.
//!   ④ Step      — BehaviorModel::step once per agent
//!                 (parallel with the `parallel` feature).
//!   ⑤ Signal    — apply Freeze/Resume in ascending AgentId order.
//!   ⑥ Move      — MobilityEngine::advance (frozen agents stay put).
//!   ⑦ Summary   — SimObserver::on_tick_end with per-state counts.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Runs phases ③ and ④ on Rayon's thread pool.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use agg_behavior::AggregationBehavior;
//! use agg_core::{AggregationConfig, RunConfig};
//! use agg_mobility::RandomWalk;
//! use agg_sim::{NoopObserver, SimBuilder};
//!
//! let aggregation = AggregationConfig::default();
//! let behavior = AggregationBehavior::new(&aggregation)?;
//! let mut sim = SimBuilder::new(aggregation, RunConfig::default(), behavior, RandomWalk::default())
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod run;
pub mod sim;
pub mod stop;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{AgentRecord, TickSummary};
pub use run::SimulationRun;
pub use sim::Sim;
pub use stop::StopHandle;
