use ndarray::Ix;

/// Number of rows on the board.
pub const ROWS: usize = 5;
/// Number of columns on the board.
pub const COLS: usize = 4;

pub(crate) type Coord = usize;
/// A linear cell index, `row * COLS + col`.
pub type Position = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The location of the linear cell index `position`.
    pub fn from_position(position: Position) -> Self {
        Self(position % COLS, position / COLS)
    }

    /// The linear cell index of this location.
    pub fn position(&self) -> Position {
        self.1 * COLS + self.0
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    pub(crate) fn in_bounds(&self) -> bool {
        self.0 < COLS && self.1 < ROWS
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
