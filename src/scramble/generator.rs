//! Scramble sequence generation.

use super::rng::ScrambleRng;
use crate::model::Face;
use crate::moves::{Direction, Move};

/// Default scramble length.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Generates random move sequences that avoid degenerate patterns.
///
/// Two candidate moves are rejected:
/// - the same face as the previous move (`U U'` collapses to nothing)
/// - the opposite of the previous face when the move before that was on the
///   candidate face (`U D U` is `U2 D` in disguise, since opposite faces
///   commute)
#[derive(Clone, Copy, Debug)]
pub struct Scrambler {
    length: usize,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}

impl Scrambler {
    /// Create a scrambler producing sequences of `length` moves.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Generate a scramble sequence.
    #[must_use]
    pub fn generate(&self, rng: &mut ScrambleRng) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(self.length);

        while moves.len() < self.length {
            let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            if !Self::face_allowed(&moves, face) {
                continue;
            }
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            moves.push(Move::new(face, direction));
        }

        moves
    }

    fn face_allowed(moves: &[Move], candidate: Face) -> bool {
        let Some(prev) = moves.last() else {
            return true;
        };
        if prev.face == candidate {
            return false;
        }
        if prev.face == candidate.opposite() {
            if let Some(before) = moves.len().checked_sub(2).and_then(|i| moves.get(i)) {
                if before.face == candidate {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MoveEngine;
    use crate::model::CubeModel;

    #[test]
    fn test_requested_length() {
        let mut rng = ScrambleRng::new(42);
        assert_eq!(Scrambler::new(10).generate(&mut rng).len(), 10);
        assert_eq!(Scrambler::default().generate(&mut rng).len(), DEFAULT_SCRAMBLE_LENGTH);
    }

    #[test]
    fn test_deterministic_per_seed() {
        let scrambler = Scrambler::default();
        let a = scrambler.generate(&mut ScrambleRng::new(42));
        let b = scrambler.generate(&mut ScrambleRng::new(42));
        let c = scrambler.generate(&mut ScrambleRng::new(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_no_repeated_or_sandwiched_faces() {
        let moves = Scrambler::new(500).generate(&mut ScrambleRng::new(7));

        for window in moves.windows(2) {
            assert_ne!(window[0].face, window[1].face);
        }
        for window in moves.windows(3) {
            let sandwiched = window[0].face == window[2].face
                && window[1].face == window[2].face.opposite();
            assert!(!sandwiched, "degenerate pattern in {:?}", window);
        }
    }

    #[test]
    fn test_scramble_leaves_cube_unsolved() {
        let moves = Scrambler::default().generate(&mut ScrambleRng::new(42));
        let scrambled = MoveEngine::apply_all(&CubeModel::solved(), moves);

        assert!(!scrambled.is_solved());
        assert_eq!(scrambled.color_counts(), [9; 6]);
    }
}
