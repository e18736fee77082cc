//! Position snapshots.
//!
//! [`PositionSnapshot`] copies every agent position into an R-tree (via
//! `rstar`) so a radius query visits only nearby agents.
//! [`BruteForceProximity`] scans a borrowed slice and is kept as a simple
//! reference implementation; both give identical answers.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use agg_core::{AgentId, Position};

use crate::{ProximityQuery, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: an `[x, y]` point with the owning agent.
#[derive(Clone)]
struct AgentEntry {
    point: [f32; 2],
    id:    AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PositionSnapshot ──────────────────────────────────────────────────────────

/// Immutable copy of all agent positions at one instant, indexed by `AgentId`.
pub struct PositionSnapshot {
    positions: Vec<Position>,
    tree:      RTree<AgentEntry>,
}

impl PositionSnapshot {
    /// Copy `positions` (indexed by `AgentId`) and bulk-load the R-tree.
    pub fn new(positions: &[Position]) -> Self {
        let entries = positions
            .iter()
            .enumerate()
            .map(|(i, p)| AgentEntry { point: p.to_array(), id: AgentId(i as u32) })
            .collect();
        Self {
            positions: positions.to_vec(),
            tree:      RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All positions, indexed by `AgentId`.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }
}

impl ProximityQuery for PositionSnapshot {
    fn count_within(&self, pos: Position, radius: f32, exclude: Option<AgentId>) -> usize {
        let r2 = radius * radius;
        let centre = pos.to_array();
        // `locate_within_distance` is inclusive; the neighbourhood is open.
        self.tree
            .locate_within_distance(centre, r2)
            .filter(|e| e.distance_2(&centre) < r2 && Some(e.id) != exclude)
            .count()
    }

    fn position(&self, agent: AgentId) -> SpatialResult<Position> {
        self.positions
            .get(agent.index())
            .copied()
            .ok_or(SpatialError::AgentNotFound(agent))
    }
}

// ── BruteForceProximity ───────────────────────────────────────────────────────

/// Linear-scan proximity over a borrowed position slice.  O(N) per query.
pub struct BruteForceProximity<'a> {
    positions: &'a [Position],
}

impl<'a> BruteForceProximity<'a> {
    pub fn new(positions: &'a [Position]) -> Self {
        Self { positions }
    }
}

impl ProximityQuery for BruteForceProximity<'_> {
    fn count_within(&self, pos: Position, radius: f32, exclude: Option<AgentId>) -> usize {
        let r2 = radius * radius;
        self.positions
            .iter()
            .enumerate()
            .filter(|&(i, p)| Some(AgentId(i as u32)) != exclude && p.distance_2(pos) < r2)
            .count()
    }

    fn position(&self, agent: AgentId) -> SpatialResult<Position> {
        self.positions
            .get(agent.index())
            .copied()
            .ok_or(SpatialError::AgentNotFound(agent))
    }
}
