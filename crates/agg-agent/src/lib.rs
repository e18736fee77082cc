//! `agg-agent` — agent population storage for the `rust_aggregation` workspace.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (agents), `AgentRngs` (per-agent RNG)        |
//! | [`builder`]     | `AgentStoreBuilder` (spawns the population)               |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
