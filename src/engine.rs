use itertools::Itertools;

use crate::board::{Board, EMPTY};
use crate::drag::DragSession;
use crate::footprint::Direction;
use crate::location::{Location, Position};
use crate::tile::{Tile, TileId, TileKind};

/// Anchor the goal tile has to reach by default: linear position 13, the bottom center exit.
pub const GOAL: Location = Location(1, 3);

/// Reasons an [`Engine`] may refuse a request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// No tile with this id was loaded.
    #[error("no tile with id {0}")]
    UnknownTile(TileId),
    /// A raw tile type outside of 1, 2, 3 and 9.
    #[error("unknown tile kind {0}")]
    UnknownTileKind(u8),
    /// Raw level data listed a different number of kinds than positions.
    #[error("{kinds} tile kinds but {positions} positions")]
    MismatchedLevel {
        /// Number of kinds given.
        kinds: usize,
        /// Number of positions given.
        positions: usize,
    },
}

/// How a tile moved during one [`Engine::advance`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Motion {
    /// Stepped into a new frontier cell.
    Forward,
    /// Stepped back to where it came from.
    Backtrack,
    /// Stayed put.
    Idle,
}

/// Outcome of one [`Engine::advance`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Advance {
    /// The tile the call was made for.
    pub tile: TileId,
    /// Anchor before the call.
    pub from: Location,
    /// Anchor after the call.
    pub to: Location,
    /// How the tile got from `from` to `to`.
    pub motion: Motion,
    /// The goal tile is resting on the goal anchor after this call.
    pub completed: bool,
}

/// Receives the completion signal from [`Engine::advance_notify`].
pub trait CompletionSink {
    /// The goal tile has reached the goal anchor.
    fn level_complete(&mut self);
}

impl<F: FnMut()> CompletionSink for F {
    fn level_complete(&mut self) {
        (*self)()
    }
}

/// Owns a level's tiles, the occupancy grid derived from them, and the drag in progress.
#[derive(Clone, Debug)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) session: DragSession,
    pub(crate) goal: Location,
}

impl Engine {
    /// Load a level. Tile ids are indices into `tiles`.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self {
            board: Board::from_tiles(&tiles),
            tiles,
            session: DragSession::default(),
            goal: GOAL,
        }
    }

    /// Replace the goal anchor, [`GOAL`] by default.
    pub fn with_goal(mut self, goal: Location) -> Self {
        self.goal = goal;
        self
    }

    /// Load a different level into this engine, dropping any drag in progress.
    pub fn init(&mut self, tiles: Vec<Tile>) {
        self.board = Board::from_tiles(&tiles);
        self.tiles = tiles;
        self.session = DragSession::default();
    }

    /// The occupancy grid as left by the last call.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every tile, indexed by [`TileId`].
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile with id `id`.
    pub fn tile(&self, id: TileId) -> Result<&Tile, EngineError> {
        self.tiles.get(id).ok_or(EngineError::UnknownTile(id))
    }

    /// The drag in progress.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Anchor the goal tile has to reach.
    pub fn goal(&self) -> Location {
        self.goal
    }

    /// See [`Board::signature`].
    pub fn signature(&self) -> u64 {
        self.board.signature()
    }

    /// Whether any goal tile sits on the goal anchor.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().any(|tile| self.is_goal_reached(tile))
    }

    /// Every legal step for a tile on the current board, ignoring the drag in progress.
    pub fn legal_moves(&self, id: TileId) -> Result<Vec<(Direction, Location)>, EngineError> {
        Ok(self.board.moves_for(self.tile(id)?))
    }

    /// Move tile `id` by at most one cell as part of a continuous drag.
    ///
    /// Dragging a different tile than the previous call starts a new drag. Within a drag, the tile steps into the
    /// most recently offered reachable cell it has not been to yet (down, then left, right, up); when no such cell
    /// borders it the tile retraces its last step instead. Once every reachable cell has been explored the drag
    /// starts over from wherever the tile ended up.
    pub fn advance(&mut self, id: TileId) -> Result<Advance, EngineError> {
        let mut tile = *self.tile(id)?;
        let from = tile.location();
        self.session.begin(id);

        let candidates = self.unvisited_moves(&tile);

        if !self.session.visited.contains(&tile.position) {
            self.session.frontier.extend(candidates.iter().copied());
            self.session.visited.insert(tile.position);
        }

        let mut motion = Motion::Idle;
        if !self.session.frontier.is_empty() {
            let next = candidates.iter()
                .rev()
                .find(|position| self.session.frontier.contains(*position))
                .copied();

            self.board.mark(&tile, EMPTY);

            match next {
                Some(position) => {
                    self.session.path.push(tile.position);
                    self.session.frontier.remove(&position);
                    tile.position = position;
                    motion = Motion::Forward;
                }
                // an empty path only happens if the caller broke the reset discipline; stay put
                None => if let Some(position) = self.session.path.pop() {
                    tile.position = position;
                    motion = Motion::Backtrack;
                },
            }

            self.board.mark(&tile, tile.kind.id());
            self.tiles[id] = tile;
        }

        let completed = self.is_goal_reached(&tile);

        if self.unvisited_moves(&tile).is_empty() && self.session.frontier.is_empty() {
            self.session.reset();
        }

        Ok(Advance {
            tile: id,
            from,
            to: tile.location(),
            motion,
            completed,
        })
    }

    /// [`advance`](Self::advance), signalling `sink` when the call leaves the goal tile on the goal anchor.
    pub fn advance_notify<S>(&mut self, id: TileId, sink: &mut S) -> Result<Advance, EngineError>
    where
        S: CompletionSink + ?Sized,
    {
        let advance = self.advance(id)?;
        if advance.completed {
            sink.level_complete();
        }

        Ok(advance)
    }

    fn is_goal_reached(&self, tile: &Tile) -> bool {
        tile.kind == TileKind::Goal && tile.location() == self.goal
    }

    fn unvisited_moves(&self, tile: &Tile) -> Vec<Position> {
        self.board.moves_for(tile)
            .into_iter()
            .map(|(_, location)| location.position())
            .filter(|position| !self.session.visited.contains(position))
            .collect_vec()
    }
}
