//! The world.

use crate::cells::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The bounding rectangle of the living cells in a world.
///
/// Both corners are inclusive. For an empty world the rectangle degenerates
/// to the origin: both corners are `(0, 0)`, which is also the `Default`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The corner with the smallest coordinates.
    pub bottom_left: Cell,

    /// The corner with the largest coordinates.
    pub top_right: Cell,
}

impl Bounds {
    /// Grows the rectangle by `margin` cells in every direction.
    pub const fn expand(self, margin: u32) -> Self {
        let margin = margin as i32;
        Self {
            bottom_left: self.bottom_left.translate(-margin, -margin),
            top_right: self.top_right.translate(margin, margin),
        }
    }
}

/// The world.
///
/// A world is the set of all cells that are alive in one generation. It is
/// stored as a plain vector without duplicates; the order of the cells
/// carries no meaning. A world is never mutated once built: stepping
/// produces a new world.
#[derive(Clone, Debug, Default)]
pub struct World {
    /// The living cells.
    cells: Vec<Cell>,
}

impl World {
    /// Seeds a new world with the given living cells.
    ///
    /// Duplicates are dropped, keeping the first occurrence, so that the
    /// world is a set no matter where the cells come from.
    pub fn seed<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut world = Self::default();
        for cell in cells {
            if !world.contains(cell) {
                world.cells.push(cell);
            }
        }
        world
    }

    /// The living cells, in no particular order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The number of living cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` is alive in this world.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The number of living neighbors of `cell`.
    pub fn living_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors()
            .iter()
            .filter(|&&neighbor| self.contains(neighbor))
            .count()
    }

    /// Whether `cell` will be alive in the next generation.
    ///
    /// This is the standard B3/S23 rule: any cell with exactly 3 living
    /// neighbors is alive in the next generation, a living cell with exactly
    /// 2 living neighbors stays alive, and every other cell is dead.
    pub fn will_live(&self, cell: Cell) -> bool {
        let count = self.living_neighbors(cell);
        count == 3 || (count == 2 && self.contains(cell))
    }

    /// The bounding rectangle of the living cells.
    pub fn bounds(&self) -> Bounds {
        if self.cells.is_empty() {
            return Bounds::default();
        }
        let mut bottom_left = self.cells[0];
        let mut top_right = self.cells[0];
        for &cell in &self.cells[1..] {
            bottom_left.x = bottom_left.x.min(cell.x);
            bottom_left.y = bottom_left.y.min(cell.y);
            top_right.x = top_right.x.max(cell.x);
            top_right.y = top_right.y.max(cell.y);
        }
        Bounds {
            bottom_left,
            top_right,
        }
    }

    /// Computes the next generation.
    ///
    /// Every cell in the bounding rectangle expanded by one in each
    /// direction is a candidate: a birth can occur right next to the current
    /// edge, but no farther out. The scan covers the whole rectangle, top
    /// row first and `x` ascending within a row, visiting each candidate
    /// exactly once, so the new vector is duplicate-free and in render
    /// order. An empty world steps to an empty world: every candidate
    /// around the degenerate bounds has zero living neighbors.
    pub fn step(&self) -> Self {
        let Bounds {
            bottom_left,
            top_right,
        } = self.bounds().expand(1);
        let mut cells = Vec::new();
        for y in (bottom_left.y..=top_right.y).rev() {
            for x in bottom_left.x..=top_right.x {
                let cell = Cell::new(x, y);
                if self.will_live(cell) {
                    cells.push(cell);
                }
            }
        }
        Self { cells }
    }

    /// Runs the simulation for the given number of generations.
    ///
    /// Returns all `generations + 1` worlds in order, starting with this
    /// one.
    pub fn iterate(&self, generations: u32) -> Vec<Self> {
        let mut worlds = Vec::with_capacity(generations as usize + 1);
        let mut current = self.clone();
        for _ in 0..generations {
            let next = current.step();
            worlds.push(current);
            current = next;
        }
        worlds.push(current);
        worlds
    }

    /// Steps the world `generations` times and returns only the final
    /// generation.
    pub fn advance(&self, generations: u32) -> Self {
        let mut world = self.clone();
        for _ in 0..generations {
            world = world.step();
        }
        world
    }
}

/// Two worlds are equal iff the same cells are alive in both, regardless of
/// the order the cells are stored in.
impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.cells.len() == other.cells.len() && self.cells.iter().all(|&cell| other.contains(cell))
    }
}

impl Eq for World {}

impl FromIterator<Cell> for World {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::seed(iter)
    }
}
