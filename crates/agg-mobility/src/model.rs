//! Movement models.
//!
//! The steering algorithm is not part of the aggregation rule; these models
//! only exist so a run can move agents between ticks.

use std::f32::consts::PI;

use agg_core::{AgentRng, Bounds, Position};

use crate::MovementState;

/// Computes an agent's next movement state.  Called once per tick for every
/// agent that is not frozen.
pub trait MovementModel: Send + Sync + 'static {
    fn advance(&self, state: &MovementState, bounds: Bounds, rng: &mut AgentRng) -> MovementState;
}

/// Agents never move.  Useful when positions are driven externally or in
/// tests that pin neighbour counts.
pub struct Stationary;

impl MovementModel for Stationary {
    fn advance(&self, state: &MovementState, _bounds: Bounds, _rng: &mut AgentRng) -> MovementState {
        *state
    }
}

/// Constant-speed walk with a small random turn each tick.  Agents bounce off
/// the world edges.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomWalk {
    /// Distance covered per tick.
    pub speed: f32,
    /// Maximum heading change per tick, in radians.
    pub max_turn: f32,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self { speed: 1.0, max_turn: 0.3 }
    }
}

impl MovementModel for RandomWalk {
    fn advance(&self, state: &MovementState, bounds: Bounds, rng: &mut AgentRng) -> MovementState {
        let mut heading = state.heading;
        if self.max_turn > 0.0 {
            heading += rng.gen_range(-self.max_turn..=self.max_turn);
        }

        let mut x = state.position.x + self.speed * heading.cos();
        let mut y = state.position.y + self.speed * heading.sin();

        if x < 0.0 || x >= bounds.width {
            heading = PI - heading;
            x = reflect(x, bounds.width);
        }
        if y < 0.0 || y >= bounds.height {
            heading = -heading;
            y = reflect(y, bounds.height);
        }

        MovementState::new(Position::new(x, y), heading.rem_euclid(2.0 * PI))
    }
}

/// Mirror `v` back into `[0, limit)`.
fn reflect(v: f32, limit: f32) -> f32 {
    let r = if v < 0.0 { -v } else { 2.0 * limit - v };
    // A step longer than the world can overshoot; keep it inside anyway.
    r.clamp(0.0, limit * (1.0 - f32::EPSILON))
}
