use std::collections::HashSet;

use crate::location::Position;
use crate::tile::TileId;

/// Bookkeeping for the drag in progress.
///
/// A drag is walked as a depth-first search over anchor positions: every first visit to a position adds its
/// unvisited neighbors to the frontier, forward steps consume frontier members, and reversing the drag pops
/// `path` one cell at a time.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    pub(crate) path: Vec<Position>,
    pub(crate) frontier: HashSet<Position>,
    pub(crate) visited: HashSet<Position>,
    pub(crate) last_tile: Option<TileId>,
}

impl DragSession {
    /// Forget everything explored so far. The dragged tile is kept.
    pub(crate) fn reset(&mut self) {
        self.path.clear();
        self.frontier.clear();
        self.visited.clear();
    }

    /// Reset unless `tile` is the one already being dragged.
    pub(crate) fn begin(&mut self, tile: TileId) {
        if self.last_tile != Some(tile) {
            self.reset();
            self.last_tile = Some(tile);
        }
    }

    /// Positions stepped through so far, oldest first.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Reachable positions not stepped into yet.
    pub fn frontier(&self) -> &HashSet<Position> {
        &self.frontier
    }

    /// Positions the tile has stood on during this drag.
    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    /// The tile the session belongs to, if any drag happened since the level was loaded.
    pub fn last_tile(&self) -> Option<TileId> {
        self.last_tile
    }

    /// Whether nothing has been explored in the current drag.
    pub fn is_idle(&self) -> bool {
        self.path.is_empty() && self.frontier.is_empty() && self.visited.is_empty()
    }
}
