//! Spatial-subsystem error type.

use thiserror::Error;

use agg_core::AgentId;

/// Errors produced by `agg-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("{0} is not in the position snapshot")]
    AgentNotFound(AgentId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
