//! History-replay solving.

use super::Solver;
use crate::engine::MoveEngine;
use crate::model::CubeModel;
use crate::moves::Move;

/// Solves by replaying a recorded move history backwards.
///
/// This is the collaborator a visualizer ships by default: the session
/// records every move since the cube was last solved, so inverting that
/// history in reverse order must return to the solved configuration. It is
/// not a cube-solving algorithm; handed a model its history does not explain,
/// it declines.
#[derive(Clone, Debug, Default)]
pub struct HistorySolver {
    history: Vec<Move>,
}

impl HistorySolver {
    /// Build from the moves applied since the cube was last solved, in
    /// application order.
    #[must_use]
    pub fn new(history: impl IntoIterator<Item = Move>) -> Self {
        Self {
            history: history.into_iter().collect(),
        }
    }
}

impl Solver for HistorySolver {
    fn solve(&self, model: &CubeModel) -> Option<Vec<Move>> {
        let solution: Vec<Move> = self.history.iter().rev().map(|mv| mv.inverse()).collect();

        // Verify rather than trust: the history may not describe this model.
        let replayed = MoveEngine::apply_all(model, solution.iter().copied());
        replayed.is_solved().then_some(solution)
    }
}
