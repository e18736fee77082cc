//! `agg-spatial` — neighbour counting over a frozen position snapshot.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`proximity`]  | `ProximityQuery` trait                                       |
//! | [`snapshot`]   | `PositionSnapshot` (R-tree), `BruteForceProximity` (linear)  |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                           |
//!
//! A snapshot is built once per tick, before any agent moves, and then only
//! read.  Every agent of the tick is answered from the same snapshot, so the
//! order in which agents are stepped cannot change any count.

pub mod error;
pub mod proximity;
pub mod snapshot;


pub use error::{SpatialError, SpatialResult};
pub use proximity::ProximityQuery;
pub use snapshot::{BruteForceProximity, PositionSnapshot};
