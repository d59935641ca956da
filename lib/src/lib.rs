mod cells;
mod error;
mod patterns;
mod render;
mod world;

pub use cells::Cell;
pub use error::Error;
pub use patterns::Pattern;
pub use render::{ALIVE_GLYPH, DEAD_GLYPH};
pub use world::{Bounds, World};
