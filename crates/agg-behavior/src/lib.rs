//! `agg-behavior` — the aggregation rule.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`probability`] | `join_probability`, `leave_probability`, `bernoulli`         |
//! | [`state`]       | `AgentState` — closed four-value behavioral state            |
//! | [`agent`]       | `Agent` — per-agent state, counter, and jittered thresholds  |
//! | [`signal`]      | `MovementSignal` (`Freeze`, `Resume`)                        |
//! | [`model`]       | `BehaviorModel` trait, `StepOutcome`                         |
//! | [`machine`]     | `AggregationBehavior` — the transition table                 |
//! | [`noop`]        | `NoopBehavior` — placeholder that never transitions          |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Design notes
//!
//! A step only touches the agent it is given and that agent's RNG, so the
//! scheduler may step all agents of a tick in parallel.  Movement side
//! effects are returned as a [`MovementSignal`] and applied afterwards by the
//! scheduler, never performed here.

pub mod agent;
pub mod error;
pub mod machine;
pub mod model;
pub mod noop;
pub mod probability;
pub mod signal;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use error::{BehaviorError, BehaviorResult};
pub use machine::AggregationBehavior;
pub use model::{BehaviorModel, StepOutcome};
pub use noop::NoopBehavior;
pub use probability::{bernoulli, join_probability, leave_probability};
pub use signal::MovementSignal;
pub use state::AgentState;
