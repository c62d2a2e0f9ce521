//! Validated construction of levels.

use crate::board::{Board, EMPTY};
use crate::engine::{Engine, GOAL};
use crate::footprint::Footprint;
use crate::location::Location;
use crate::tile::{Tile, TileKind};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// Part of a tile's footprint lies outside the board.
    #[error("tile at {0:?} does not fit on the board")]
    TileOutOfBounds(Location),
    /// A tile's footprint covers a cell another tile already covers.
    #[error("tile at {0:?} overlaps another tile")]
    TileOverlap(Location),
}

/// Collects the tiles of a level, checking each footprint as it is added.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Default)]
pub struct LevelBuilder {
    tiles: Vec<Tile>,
    occupied: Board,
    goal: Option<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl LevelBuilder {
    /// An empty level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile of `kind` anchored at `location`. Tiles get ids in the order they are added.
    ///
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) or
    /// [`TileOverlap`](BuilderInvalidReason::TileOverlap) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_tile(&mut self, kind: TileKind, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let cells = kind.cells(location);
        if !cells.iter().all(Location::in_bounds) {
            self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds(location));
            return self;
        }

        if !cells.iter().all(|cell| self.occupied.is_empty_at(*cell)) {
            self.invalid_reasons.push(BuilderInvalidReason::TileOverlap(location));
            return self;
        }

        let tile = Tile::new(kind, location.position());
        self.occupied.mark(&tile, kind.id());
        self.tiles.push(tile);

        self
    }

    /// Remove the most recently added tile.
    ///
    /// If the builder is in an invalid state or no tiles are present, this function does nothing.
    pub fn pop_tile(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some(tile) = self.tiles.pop() {
            self.occupied.mark(&tile, EMPTY);
        }

        self
    }

    /// Anchor the goal tile has to reach; [`GOAL`] unless set.
    pub fn with_goal(&mut self, location: Location) -> &mut Self {
        self.goal = Some(location);
        self
    }

    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into an [`Engine`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Engine, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Engine::new(self.tiles.clone()).with_goal(self.goal.unwrap_or(GOAL)))
    }
}
