//! `agg-mobility` — the movement collaborator of the aggregation core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MovementState` — per-agent position and heading                  |
//! | [`store`]   | `MobilityStore` — double-buffered states + frozen flags           |
//! | [`model`]   | `MovementModel` trait, `Stationary`, `RandomWalk`                 |
//! | [`engine`]  | `MobilityEngine<M>` — applies signals, advances movement          |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model contract
//!
//! The aggregation core never steers.  It only:
//!
//! 1. reads every agent's position once per tick (to build the proximity
//!    snapshot), and
//! 2. sends [`MovementSignal::Freeze`][agg_behavior::MovementSignal] on
//!    `Joining → Still` and `Resume` on `Still → Leaving`.
//!
//! After the state-machine step, `MobilityEngine::advance` moves every
//! agent that is not frozen.  New states are written to a second buffer and
//! swapped in, so nothing reads a half-updated position.

pub mod engine;
pub mod error;
pub mod model;
pub mod state;
pub mod store;


pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use model::{MovementModel, RandomWalk, Stationary};
pub use state::MovementState;
pub use store::MobilityStore;
