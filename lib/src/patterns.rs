//! The built-in seed patterns.

use crate::{cells::Cell, error::Error, world::World};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The cells of the [R-pentomino](https://conwaylife.com/wiki/R-pentomino).
const RPENTOMINO: [Cell; 5] = [
    Cell::new(3, 2),
    Cell::new(2, 3),
    Cell::new(3, 3),
    Cell::new(3, 4),
    Cell::new(4, 4),
];

/// The cells of a [glider](https://conwaylife.com/wiki/Glider) heading
/// southeast, with a [block](https://conwaylife.com/wiki/Block) sitting out
/// of its way.
const GLIDER: [Cell; 9] = [
    Cell::new(-2, -2),
    Cell::new(-1, -2),
    Cell::new(-2, -1),
    Cell::new(-1, -1),
    Cell::new(1, 1),
    Cell::new(2, 1),
    Cell::new(3, 1),
    Cell::new(3, 2),
    Cell::new(2, 3),
];

/// The cells of a [block](https://conwaylife.com/wiki/Block).
const SQUARE: [Cell; 4] = [
    Cell::new(1, 1),
    Cell::new(2, 1),
    Cell::new(1, 2),
    Cell::new(2, 2),
];

/// A named seed pattern.
///
/// Patterns are the built-in starting points of the simulation. Each one
/// carries a fixed list of cells; seeding the same pattern twice gives two
/// equal worlds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// The R-pentomino, a methuselah: 5 cells that keep churning for more
    /// than a thousand generations.
    RPentomino,

    /// A glider heading southeast, plus a block it never touches.
    Glider,

    /// A 2×2 block, the smallest still life.
    Square,
}

impl Pattern {
    /// All the patterns.
    pub const ALL: [Self; 3] = [Self::RPentomino, Self::Glider, Self::Square];

    /// The name of the pattern, as accepted by [`FromStr`](std::str::FromStr).
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::RPentomino => "rpentomino",
            Pattern::Glider => "glider",
            Pattern::Square => "square",
        }
    }

    /// The cells of the pattern.
    pub const fn cells(self) -> &'static [Cell] {
        match self {
            Pattern::RPentomino => &RPENTOMINO,
            Pattern::Glider => &GLIDER,
            Pattern::Square => &SQUARE,
        }
    }

    /// Seeds a new world with this pattern.
    pub fn seed(self) -> World {
        World::seed(self.cells().iter().copied())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rpentomino" => Ok(Pattern::RPentomino),
            "glider" => Ok(Pattern::Glider),
            "square" => Ok(Pattern::Square),
            _ => Err(Error::UnknownPattern(s.to_string())),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
