//! # virtucube-core
//!
//! Combinatorial core for a 3x3x3 Rubik's Cube visualizer.
//!
//! ## Design Principles
//!
//! 1. **Pure value transforms**: a move consumes a model and returns the
//!    next one. The engine holds no state; nothing mutates in place, so the
//!    visual shell never observes a half-permuted grid.
//!
//! 2. **One permutation table**: only clockwise quarter turns are tabled.
//!    Counter-clockwise and 180-degree turns are compositions, which makes
//!    the inverse and double-turn laws hold by construction.
//!
//! 3. **Rendering stays outside**: the core exposes facelet colors by
//!    `(face, row, col)` and never depends on scene or geometry types. The
//!    scene adapter and any real solving algorithm are collaborators behind
//!    seams ([`CubeModel::facelets`], [`Solver`]).
//!
//! ## Modules
//!
//! - `model`: colors, faces, and the 54-facelet cube state
//! - `moves`: the move value type and Singmaster notation
//! - `engine`: quarter-turn permutation tables and move application
//! - `session`: presentation-facing shell (move queue, history, reset)
//! - `scramble`: deterministic scramble generation
//! - `solver`: the solving seam and the history-replay solver

pub mod engine;
pub mod model;
pub mod moves;
pub mod scramble;
pub mod session;
pub mod solver;

// Re-export commonly used types
pub use crate::model::{Color, CubeModel, Face, OutOfRangeError, FACELET_COUNT, GRID_SIZE};

pub use crate::moves::{format_sequence, Direction, InvalidMoveError, Move};

pub use crate::engine::MoveEngine;

pub use crate::session::{CubeSession, MoveRecord};

pub use crate::scramble::{ScrambleRng, Scrambler, DEFAULT_SCRAMBLE_LENGTH};

pub use crate::solver::{HistorySolver, Solver};
