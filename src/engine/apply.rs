//! The move engine: pure face-turn application.
//!
//! `apply` consumes a model and a move and returns the next model. The
//! engine holds no state between calls; atomicity falls out of building the
//! full next state before handing it back.

use super::tables::RINGS;
use crate::model::{CubeModel, Face, GRID_SIZE};
use crate::moves::Move;

/// Applies face turns to cube models.
///
/// Stateless; every method is a pure function over the 54-facelet domain, so
/// application can never fail for a structurally valid model.
pub struct MoveEngine;

impl MoveEngine {
    /// Apply one move, producing the next model.
    ///
    /// Double and counter-clockwise turns are composed from the clockwise
    /// quarter turn, so `apply(apply(m, f cw), f ccw) == m` holds for every
    /// face and model.
    #[must_use]
    pub fn apply(model: &CubeModel, mv: Move) -> CubeModel {
        let mut next = model.clone();
        for face in mv.cw_quarter_turns() {
            next = Self::quarter_turn_cw(&next, face);
        }
        next
    }

    /// Fold a move sequence left to right.
    #[must_use]
    pub fn apply_all(model: &CubeModel, moves: impl IntoIterator<Item = Move>) -> CubeModel {
        moves
            .into_iter()
            .fold(model.clone(), |m, mv| Self::apply(&m, mv))
    }

    /// One clockwise quarter turn of `face`.
    fn quarter_turn_cw(model: &CubeModel, face: Face) -> CubeModel {
        let mut next = model.clone();

        // Rotate the turned face's own grid 90 degrees clockwise.
        let own = model.grid(face);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                next.set(face, row, col, own[GRID_SIZE - 1 - col][row]);
            }
        }

        // Cycle the neighboring edge strips: strip i feeds strip i + 1.
        let ring = &RINGS[face.index()];
        for i in 0..4 {
            let src = &ring[i];
            let dst = &ring[(i + 1) % 4];
            for j in 0..3 {
                let (sf, sr, sc) = src[j];
                let (df, dr, dc) = dst[j];
                next.set(df, dr, dc, model.grid(sf)[sr][sc]);
            }
        }

        next
    }
}
