use agg_behavior::BehaviorError;
use agg_core::{AgentId, AggError};
use agg_mobility::MobilityError;
use agg_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] AggError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("behavior step failed for {agent}: {source}")]
    Behavior {
        agent:  AgentId,
        #[source]
        source: BehaviorError,
    },

    #[error("proximity query failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("could not build worker pool: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
