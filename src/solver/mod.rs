//! Solving seam.
//!
//! The core does not solve cubes. It specifies only the contract a solving
//! collaborator must meet: given a model, return an ordered move sequence
//! that reaches the solved configuration. Published algorithms (Kociemba,
//! Thistlethwaite, ...) plug in behind [`Solver`] without the core depending
//! on them.

pub mod history;

pub use history::HistorySolver;

use crate::model::CubeModel;
use crate::moves::Move;

/// A solving collaborator.
pub trait Solver {
    /// Produce a move sequence that solves `model`, applied in order.
    ///
    /// Returns `None` when this solver cannot produce a solution for the
    /// given model.
    fn solve(&self, model: &CubeModel) -> Option<Vec<Move>>;
}
