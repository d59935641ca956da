//! Rendering a world as text.

use crate::{cells::Cell, world::World};

/// The glyph for a living cell.
pub const ALIVE_GLYPH: char = '▣';

/// The glyph for a dead cell.
pub const DEAD_GLYPH: char = '▢';

impl World {
    /// Renders the world as a small block of text.
    ///
    /// Only the bounding rectangle of the living cells is drawn. Rows are
    /// printed from north to south and cells within a row from west to
    /// east, with living cells drawn as `▣` and dead cells as `▢`. Glyphs
    /// in a row are separated by a single space and every row ends with a
    /// newline. An empty world renders as a single dead cell.
    pub fn render(&self) -> String {
        let bounds = self.bounds();
        let mut text = String::new();
        for y in (bounds.bottom_left.y..=bounds.top_right.y).rev() {
            for x in bounds.bottom_left.x..=bounds.top_right.x {
                if x > bounds.bottom_left.x {
                    text.push(' ');
                }
                if self.contains(Cell::new(x, y)) {
                    text.push(ALIVE_GLYPH);
                } else {
                    text.push(DEAD_GLYPH);
                }
            }
            text.push('\n');
        }
        text
    }
}
