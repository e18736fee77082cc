//! Signals from the state machine to the movement subsystem.

/// A request for the movement subsystem, produced by a state transition.
///
/// The state machine never moves agents itself; the scheduler applies these
/// after every agent of the tick has been stepped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MovementSignal {
    /// Stop moving.  Emitted once, on `Joining → Still`.
    Freeze,
    /// Start moving again.  Emitted once, on `Still → Leaving`.
    Resume,
}
