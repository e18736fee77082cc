use agg_core::AggError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A negative neighbour count reached the probability model.  Indicates a
    /// broken proximity query; the run must abort.
    #[error("invalid neighbour count {0}: must be >= 0")]
    InvalidNeighborCount(i64),

    /// A state label outside the four known states.
    #[error("invalid agent state {0:?}")]
    InvalidState(String),

    #[error("behavior configuration error: {0}")]
    Config(#[from] AggError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
