use agg_core::{AgentId, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("{0} is out of range")]
    AgentOutOfRange(AgentId),

    #[error("{agent} starts outside the world at {position}")]
    OutOfBounds { agent: AgentId, position: Position },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
