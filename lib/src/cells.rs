//! Cells in the cellular automaton.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offsets of the 8 cells in the neighborhood, in a fixed order:
/// NW, N, NE, W, E, SW, S, SE.
const NBHD: [(i32, i32); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A cell on the grid.
///
/// Cells are identified by their coordinates. Both coordinates are signed
/// and unrestricted; the grid is conceptually infinite. `x` grows to the
/// east and `y` grows to the north.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// The x-coordinate of the cell.
    pub x: i32,

    /// The y-coordinate of the cell.
    pub y: i32,
}

impl Cell {
    /// Creates a new cell from its coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset from this one by `(dx, dy)`.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 cells in the neighborhood of this cell.
    ///
    /// The neighbors are returned in a fixed order, NW, N, NE, W, E, SW, S,
    /// SE, so that everything derived from them is reproducible. The cell
    /// itself is not among them.
    pub fn neighbors(self) -> [Self; 8] {
        NBHD.map(|(dx, dy)| self.translate(dx, dy))
    }
}
