//! The `ProximityQuery` trait.

use agg_core::{AgentId, Position};

use crate::SpatialResult;

/// Answers "how many other agents are near this one?" for a single instant.
///
/// Implementations are read-only views: answering a query must never change
/// what a later query returns.  `Sync` is required because the scheduler
/// may query from several Rayon workers at once.
pub trait ProximityQuery: Sync {
    /// Number of other agents strictly closer than `radius` to `pos`,
    /// ignoring `exclude` if given.
    fn count_within(&self, pos: Position, radius: f32, exclude: Option<AgentId>) -> usize;

    /// Position of `agent` at the snapshot instant.
    fn position(&self, agent: AgentId) -> SpatialResult<Position>;

    /// Number of other agents strictly within `radius` of `agent`.  The agent
    /// never counts itself.
    fn neighbour_count(&self, agent: AgentId, radius: f32) -> SpatialResult<usize> {
        let pos = self.position(agent)?;
        Ok(self.count_within(pos, radius, Some(agent)))
    }
}
