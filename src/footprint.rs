use std::fmt::{Display, Formatter};

use itertools::Itertools;
use strum::VariantArray;

use crate::location::{Location, COLS, ROWS};
use crate::tile::TileKind;

/// A single-cell step on the board.
///
/// Variants are declared in the order moves are offered to the drag engine: up, right, left, down.
/// [`Engine::advance`](crate::Engine::advance) prefers the last legal one, so this order is observable.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last column.
    Right,
    /// Toward column 0.
    Left,
    /// Toward the last row.
    Down,
}

impl Direction {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping off the top or left edge wraps to a huge coordinate, which is never [in bounds](Location::in_bounds).
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((0, 1)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
        })
    }
}

/// Movement rules shared by every tile footprint.
///
/// A `w×h` footprint may step in a direction when its anchor stays on the board and the cells just past its
/// leading edge are empty. For right and down steps the anchor only advances one cell even though the cells
/// checked lie `w` (or `h`) cells away from it.
pub trait Footprint: Copy {
    /// Footprint size as `(width, height)`.
    fn size(self) -> (usize, usize);

    /// Every cell covered by a tile anchored at `anchor`, anchor first.
    fn cells(self, anchor: Location) -> Vec<Location> {
        let (w, h) = self.size();
        (0..h).cartesian_product(0..w)
            .map(|(dy, dx)| Location(anchor.0 + dx, anchor.1 + dy))
            .collect_vec()
    }

    /// The anchor reached by stepping in `direction` and the cells which must be empty for the step,
    /// or [`None`] if the step would leave the board.
    fn clearance(self, anchor: Location, direction: Direction) -> Option<(Location, Vec<Location>)> {
        let (w, h) = self.size();
        let Location(x, y) = anchor;

        let within = match direction {
            Direction::Up => y > 0,
            Direction::Right => x + w < COLS,
            Direction::Left => x > 0,
            Direction::Down => y + h < ROWS,
        };
        if !within {
            return None;
        }

        let required = match direction {
            Direction::Up => (0..w).map(|dx| Location(x + dx, y - 1)).collect_vec(),
            Direction::Right => (0..h).map(|dy| Location(x + w, y + dy)).collect_vec(),
            Direction::Left => (0..h).map(|dy| Location(x - 1, y + dy)).collect_vec(),
            Direction::Down => (0..w).map(|dx| Location(x + dx, y + h)).collect_vec(),
        };

        Some((direction.attempt_from(anchor), required))
    }

    /// All legal steps from `anchor`, in [`Direction`] declaration order, given an occupancy test.
    fn moves_from<F>(self, anchor: Location, is_empty: F) -> Vec<(Direction, Location)>
    where
        F: Fn(Location) -> bool,
    {
        Direction::VARIANTS.iter()
            .filter_map(|direction| {
                let (target, required) = self.clearance(anchor, *direction)?;
                required.into_iter()
                    .all(&is_empty)
                    .then_some((*direction, target))
            })
            .collect_vec()
    }
}

impl Footprint for TileKind {
    fn size(self) -> (usize, usize) {
        self.dims()
    }
}
