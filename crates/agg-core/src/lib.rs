//! `agg-core` — foundational types for the `rust_aggregation` workspace.
//!
//! This crate is a dependency of every other `agg-*` crate.  It has no
//! `agg-*` dependencies and few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Position`, `Bounds`                                  |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `AggregationConfig`, `RunConfig`                      |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global), seeding    |
//! | [`error`]       | `AggError`, `AggResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AggregationConfig, RunConfig};
pub use error::{AggError, AggResult};
pub use geo::{Bounds, Position};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng, resolve_seed};
pub use time::{SimClock, Tick};
