//! Per-agent movement state.

use agg_core::Position;

/// Where an agent is and which way it is facing.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MovementState {
    pub position: Position,

    /// Direction of travel in radians, measured from the +x axis.
    pub heading: f32,
}

impl MovementState {
    #[inline]
    pub fn new(position: Position, heading: f32) -> Self {
        Self { position, heading }
    }
}
