use std::fmt::{Display, Formatter};

use strum::VariantArray;

use crate::engine::EngineError;
use crate::location::{Location, Position};

/// Index of a tile in the tile list an [`Engine`](crate::Engine) was loaded with.
pub type TileId = usize;

/// The four tile footprints. The discriminant is the value a tile stamps into the board.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[repr(u8)]
pub enum TileKind {
    /// 1×1.
    Single = 1,
    /// One row, two columns.
    Horizontal = 2,
    /// Two rows, one column.
    Vertical = 3,
    /// 2×2, the tile that has to reach the exit.
    Goal = 9,
}

impl TileKind {
    /// The value stamped into each cell this kind covers.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Footprint size as `(width, height)`.
    pub fn dims(self) -> (usize, usize) {
        match self {
            Self::Single => (1, 1),
            Self::Horizontal => (2, 1),
            Self::Vertical => (1, 2),
            Self::Goal => (2, 2),
        }
    }
}

impl TryFrom<u8> for TileKind {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::VARIANTS.iter()
            .copied()
            .find(|kind| kind.id() == value)
            .ok_or(EngineError::UnknownTileKind(value))
    }
}

impl Display for TileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Tiles from parallel lists of raw kinds and linear anchor positions, as level data usually stores them.
pub fn tiles_from_raw(kinds: &[u8], positions: &[u32]) -> Result<Vec<Tile>, EngineError> {
    if kinds.len() != positions.len() {
        return Err(EngineError::MismatchedLevel { kinds: kinds.len(), positions: positions.len() });
    }

    kinds.iter()
        .zip(positions)
        .map(|(kind, position)| Ok(Tile::new(TileKind::try_from(*kind)?, *position as usize)))
        .collect()
}

/// A tile anchored at its top left cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tile {
    /// Never changes once the tile exists.
    pub kind: TileKind,
    /// Linear index of the anchor cell.
    pub position: Position,
}

impl Tile {
    /// A tile of `kind` anchored at `position`.
    pub fn new(kind: TileKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The anchor as a [`Location`].
    pub fn location(&self) -> Location {
        Location::from_position(self.position)
    }
}
