//! Cube state: colors, faces, and the 54-facelet model.
//!
//! Everything here is a pure value type. State changes happen only through
//! the move engine, which consumes a model and returns the next one.

pub mod color;
pub mod cube;
pub mod face;

pub use color::Color;
pub use cube::{CubeModel, OutOfRangeError, FACELET_COUNT, GRID_SIZE};
pub use face::Face;
