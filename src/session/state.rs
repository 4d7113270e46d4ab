//! The presentation-facing session: current model, move queue, history.
//!
//! ## Ownership
//!
//! The session owns the single "current model" reference on behalf of the
//! visual shell. Every settled move replaces the model wholesale (the engine
//! returns a fresh value), so the shell and its scene adapter never observe a
//! half-permuted grid.
//!
//! ## Serialized queue
//!
//! Moves are queued with [`enqueue`](CubeSession::enqueue) and applied one at
//! a time with [`settle_one`](CubeSession::settle_one): the shell settles the
//! next move only after the previous move's animation has adopted the new
//! model, which guarantees move order equals visual order. A reset drops any
//! queued-but-unsettled moves.

use std::collections::VecDeque;

use im::Vector;

use super::record::MoveRecord;
use crate::engine::MoveEngine;
use crate::model::CubeModel;
use crate::moves::Move;
use crate::scramble::{ScrambleRng, Scrambler};
use crate::solver::HistorySolver;

/// Session state for one cube being displayed and manipulated.
#[derive(Clone, Debug)]
pub struct CubeSession {
    /// The current model; replaced, never mutated in place.
    current: CubeModel,

    /// Queued-but-not-yet-applied moves.
    pending: VecDeque<Move>,

    /// Every settled move since the last reset, in application order.
    history: Vector<MoveRecord>,

    /// Next sequence number to assign.
    sequence: u32,
}

impl Default for CubeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSession {
    /// Start a session on a solved cube.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: CubeModel::solved(),
            pending: VecDeque::new(),
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// The current model.
    #[must_use]
    pub fn model(&self) -> &CubeModel {
        &self.current
    }

    /// An owned snapshot of the current model, for the scene adapter to
    /// animate from without borrowing the session.
    #[must_use]
    pub fn snapshot(&self) -> CubeModel {
        self.current.clone()
    }

    /// Whether the current model is the solved configuration.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current.is_solved()
    }

    // === Queue ===

    /// Queue a move without applying it.
    pub fn enqueue(&mut self, mv: Move) {
        self.pending.push_back(mv);
    }

    /// Queue a sequence of moves in order.
    pub fn enqueue_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.pending.extend(moves);
    }

    /// Whether no moves are waiting to be applied.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of queued-but-unsettled moves.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Apply exactly the next queued move and record it.
    ///
    /// Returns `None` when the queue is empty.
    pub fn settle_one(&mut self) -> Option<MoveRecord> {
        let mv = self.pending.pop_front()?;
        Some(self.settle(mv))
    }

    /// Apply every queued move in order. Returns the number settled.
    pub fn settle_all(&mut self) -> usize {
        let mut settled = 0;
        while self.settle_one().is_some() {
            settled += 1;
        }
        settled
    }

    /// Queue a move and settle the whole queue synchronously.
    ///
    /// The shell uses this when it animates nothing (or animates after the
    /// fact); queued order is preserved.
    pub fn apply(&mut self, mv: Move) -> &CubeModel {
        self.enqueue(mv);
        self.settle_all();
        &self.current
    }

    fn settle(&mut self, mv: Move) -> MoveRecord {
        self.current = MoveEngine::apply(&self.current, mv);
        let record = MoveRecord::new(mv, self.sequence);
        self.sequence += 1;
        self.history.push_back(record);
        record
    }

    // === Reset ===

    /// Return to the solved configuration unconditionally.
    ///
    /// Drops queued-but-unsettled moves and clears the history.
    pub fn reset(&mut self) {
        self.current = CubeModel::solved();
        self.pending.clear();
        self.history.clear();
        self.sequence = 0;
    }

    // === History ===

    /// Settled moves since the last reset, in application order.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Number of settled moves since the last reset.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Undo the most recent settled move by applying its inverse.
    ///
    /// The inverse application is itself recorded; history only grows.
    /// Returns the undone record, or `None` if no move has settled.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let last = self.history.last().copied()?;
        self.settle(last.mv.inverse());
        Some(last)
    }

    /// A solver that replays this session's history backwards.
    #[must_use]
    pub fn history_solver(&self) -> HistorySolver {
        HistorySolver::new(self.history.iter().map(|r| r.mv))
    }

    // === Scrambling ===

    /// Generate, apply, and record a scramble; returns the moves used.
    pub fn scramble(&mut self, scrambler: &Scrambler, rng: &mut ScrambleRng) -> Vec<Move> {
        let moves = scrambler.generate(rng);
        self.enqueue_all(moves.iter().copied());
        self.settle_all();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Face;
    use crate::moves::Direction;

    fn mv(face: Face, direction: Direction) -> Move {
        Move::new(face, direction)
    }

    #[test]
    fn test_new_session_is_solved_and_settled() {
        let session = CubeSession::new();
        assert!(session.is_solved());
        assert!(session.is_settled());
        assert_eq!(session.history_len(), 0);
    }

    #[test]
    fn test_enqueue_does_not_apply() {
        let mut session = CubeSession::new();
        session.enqueue(mv(Face::Front, Direction::Clockwise));

        assert!(session.is_solved());
        assert!(!session.is_settled());
        assert_eq!(session.pending_len(), 1);
    }

    #[test]
    fn test_settle_one_applies_in_order() {
        let mut session = CubeSession::new();
        session.enqueue(mv(Face::Front, Direction::Clockwise));
        session.enqueue(mv(Face::Front, Direction::CounterClockwise));

        let first = session.settle_one().unwrap();
        assert_eq!(first.mv, mv(Face::Front, Direction::Clockwise));
        assert_eq!(first.sequence, 0);
        assert!(!session.is_solved());
        assert!(!session.is_settled());

        let second = session.settle_one().unwrap();
        assert_eq!(second.sequence, 1);
        assert!(session.is_solved());
        assert!(session.is_settled());
        assert_eq!(session.settle_one(), None);
    }

    #[test]
    fn test_apply_settles_synchronously() {
        let mut session = CubeSession::new();
        session.apply(mv(Face::Up, Direction::Double));

        assert!(!session.is_solved());
        assert!(session.is_settled());
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_reset_drops_queue_and_history() {
        let mut session = CubeSession::new();
        session.apply(mv(Face::Right, Direction::Clockwise));
        session.enqueue(mv(Face::Left, Direction::Clockwise));

        session.reset();

        assert!(session.is_solved());
        assert!(session.is_settled());
        assert_eq!(session.history_len(), 0);

        // Sequence numbering restarts after reset.
        session.apply(mv(Face::Down, Direction::Clockwise));
        assert_eq!(session.history().next().unwrap().sequence, 0);
    }

    #[test]
    fn test_undo_reverses_last_move() {
        let mut session = CubeSession::new();
        session.apply(mv(Face::Back, Direction::Clockwise));
        let before = session.snapshot();
        session.apply(mv(Face::Left, Direction::Double));

        let undone = session.undo().unwrap();
        assert_eq!(undone.mv, mv(Face::Left, Direction::Double));
        assert_eq!(*session.model(), before);
        // The undo itself is part of history.
        assert_eq!(session.history_len(), 3);
    }

    #[test]
    fn test_undo_on_fresh_session() {
        let mut session = CubeSession::new();
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut session = CubeSession::new();
        let snapshot = session.snapshot();
        session.apply(mv(Face::Front, Direction::Clockwise));

        assert!(snapshot.is_solved());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_scramble_records_history() {
        let mut session = CubeSession::new();
        let moves = session.scramble(&Scrambler::new(12), &mut ScrambleRng::new(42));

        assert_eq!(moves.len(), 12);
        assert_eq!(session.history_len(), 12);
        assert!(session.is_settled());
        let recorded: Vec<Move> = session.history().map(|r| r.mv).collect();
        assert_eq!(recorded, moves);
    }
}
