//! The occupancy grid, tile stamping, and board signatures.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::footprint::{Direction, Footprint};
use crate::location::{Location, COLS, ROWS};
use crate::tile::{Tile, TileKind};

/// Value of a cell no tile covers.
pub const EMPTY: u8 = 0;

/// The occupancy grid. Each cell holds [`EMPTY`] or the [id](TileKind::id) of the tile covering it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: Array2::zeros((ROWS, COLS)),
        }
    }
}

impl Board {
    /// Stamp every tile's footprint onto an empty grid.
    ///
    /// Nothing is validated: a later tile overwrites an earlier one wherever they overlap, and cells falling off
    /// the board are dropped. Use a [`LevelBuilder`](crate::LevelBuilder) to reject such input.
    pub fn from_tiles<'a, I>(tiles: I) -> Self
    where
        I: IntoIterator<Item = &'a Tile>,
    {
        let mut board = Self::default();
        for tile in tiles {
            board.mark(tile, tile.kind.id());
        }

        board
    }

    /// Contents of the cell at `location`, or [`None`] off the board.
    pub fn get(&self, location: Location) -> Option<u8> {
        self.cells.get(location.as_index()).copied()
    }

    /// Whether `location` is on the board and empty.
    pub fn is_empty_at(&self, location: Location) -> bool {
        self.get(location) == Some(EMPTY)
    }

    /// Stamp `value` over the footprint of `tile` at its current position.
    /// `0` clears it, the tile's own id occupies it.
    pub fn mark(&mut self, tile: &Tile, value: u8) {
        for location in tile.kind.cells(tile.location()) {
            if let Some(cell) = self.cells.get_mut(location.as_index()) {
                *cell = value;
            }
        }
    }

    /// Legal single-cell steps for `tile` against the current contents of the board.
    pub fn moves_for(&self, tile: &Tile) -> Vec<(Direction, Location)> {
        tile.kind.moves_from(tile.location(), |location| self.is_empty_at(location))
    }

    /// Rows of raw cell values, top to bottom.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells.rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect_vec()
    }

    /// A canonical key for this configuration.
    ///
    /// Cells are read in row-major order. Every cell not covered by the goal tile takes the next two bits,
    /// least significant first. The anchor of the goal tile, i.e. the first goal cell seen, is stored from bit 32
    /// upwards. With a goal tile on the board only 16 cells remain, so the two bands never overlap and two such
    /// boards share a key exactly when their cells match. Boards without a goal tile use up to 40 bits for cells
    /// and may collide with boards that have one.
    pub fn signature(&self) -> u64 {
        let goal = TileKind::Goal.id();
        let mut key = 0u64;
        let mut goal_seen = false;
        let mut counter = 0u32;

        for ((row, col), &value) in self.cells.indexed_iter() {
            if value == goal {
                if !goal_seen {
                    goal_seen = true;
                    key += (Location(col, row).position() as u64) << 32;
                }
            } else {
                key += (value as u64) << (2 * counter);
                counter += 1;
            }
        }

        key
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for value in row {
                out.push(match *value {
                    EMPTY => '.',
                    value => char::from_digit(value as u32, 10).unwrap_or('?'),
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
