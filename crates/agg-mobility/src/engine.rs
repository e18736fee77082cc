//! `MobilityEngine` — owns movement state and applies the state machine's
//! freeze/resume signals.

use std::f32::consts::TAU;

use agg_behavior::MovementSignal;
use agg_core::{AgentId, AgentRng, Bounds, Position, SimRng};

use crate::{MobilityError, MobilityResult, MobilityStore, MovementModel, MovementState};

/// Stream salt for per-agent movement RNGs, so movement draws never shift
/// the behavior draws of the same agent.
pub const MOVEMENT_STREAM: u64 = 0x6d6f_7665_6d65_6e74;

/// Moves agents with a pluggable [`MovementModel`].
///
/// Generic over the model so the per-agent `advance` call is monomorphised.
pub struct MobilityEngine<M: MovementModel> {
    pub model: M,
    pub store: MobilityStore,
    bounds: Bounds,
    rngs: Vec<AgentRng>,
}

impl<M: MovementModel> MobilityEngine<M> {
    /// Place `count` agents uniformly at random inside `bounds`, each with a
    /// random heading.  Placement uses a `SimRng` derived from `seed`.
    pub fn scatter(model: M, count: usize, bounds: Bounds, seed: u64) -> Self {
        let mut rng = SimRng::new(seed).child(MOVEMENT_STREAM);
        let states = (0..count)
            .map(|_| {
                let x = rng.random::<f32>() * bounds.width;
                let y = rng.random::<f32>() * bounds.height;
                MovementState::new(Position::new(x, y), rng.random::<f32>() * TAU)
            })
            .collect();
        Self::from_states(model, states, bounds, seed)
    }

    /// Start from explicit positions (heading 0).
    ///
    /// # Errors
    ///
    /// [`MobilityError::OutOfBounds`] if any position lies outside `bounds`.
    pub fn with_positions(
        model: M,
        positions: &[Position],
        bounds: Bounds,
        seed: u64,
    ) -> MobilityResult<Self> {
        let mut states = Vec::with_capacity(positions.len());
        for (i, &position) in positions.iter().enumerate() {
            if !bounds.contains(position) {
                return Err(MobilityError::OutOfBounds {
                    agent: AgentId(i as u32),
                    position,
                });
            }
            states.push(MovementState::new(position, 0.0));
        }
        Ok(Self::from_states(model, states, bounds, seed))
    }

    fn from_states(model: M, states: Vec<MovementState>, bounds: Bounds, seed: u64) -> Self {
        let rngs = (0..states.len())
            .map(|i| AgentRng::with_stream(seed, AgentId(i as u32), MOVEMENT_STREAM))
            .collect();
        Self {
            model,
            store: MobilityStore::new(states),
            bounds,
            rngs,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current position of every agent, indexed by `AgentId`.
    pub fn positions(&self) -> Vec<Position> {
        self.store.positions()
    }

    // ── Signals ───────────────────────────────────────────────────────────────

    /// Stop `agent` in place until it is resumed.
    pub fn freeze(&mut self, agent: AgentId) -> MobilityResult<()> {
        self.store.set_frozen(agent, true)
    }

    /// Let `agent` move again.
    pub fn resume(&mut self, agent: AgentId) -> MobilityResult<()> {
        self.store.set_frozen(agent, false)
    }

    /// Apply a signal emitted by the state machine.
    pub fn apply(&mut self, agent: AgentId, signal: MovementSignal) -> MobilityResult<()> {
        match signal {
            MovementSignal::Freeze => self.freeze(agent),
            MovementSignal::Resume => self.resume(agent),
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────────

    /// Advance every non-frozen agent by one tick.
    ///
    /// Frozen agents keep their exact state.  Results go to the store's
    /// write buffer, which is swapped in once every agent has moved.
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        let model = &self.model;
        let (current, frozen, next) = self.store.buffers();
        for (i, ((state, &is_frozen), rng)) in
            current.iter().zip(frozen).zip(self.rngs.iter_mut()).enumerate()
        {
            next[i] = if is_frozen {
                *state
            } else {
                model.advance(state, bounds, rng)
            };
        }
        self.store.swap();
    }
}
