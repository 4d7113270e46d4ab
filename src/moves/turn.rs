//! The move value type: one face turn.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::model::Face;

/// Turn direction, as seen looking at the face from outside the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
    /// A 180-degree turn; equal to two clockwise quarter turns.
    Double,
}

impl Direction {
    /// All directions, in canonical order.
    pub const ALL: [Direction; 3] = [
        Direction::Clockwise,
        Direction::CounterClockwise,
        Direction::Double,
    ];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Double => Direction::Double,
        }
    }

    /// Number of clockwise quarter turns this direction decomposes into.
    ///
    /// Counter-clockwise is three clockwise quarter turns; this is what makes
    /// it the exact inverse permutation without a second hand-written table.
    #[must_use]
    pub const fn quarter_turn_count(self) -> usize {
        match self {
            Direction::Clockwise => 1,
            Direction::Double => 2,
            Direction::CounterClockwise => 3,
        }
    }
}

/// One face turn: a face plus a direction.
///
/// Pure value type with no identity; equality and hashing are structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.direction.inverse())
    }

    /// Decompose into clockwise quarter turns of the same face.
    ///
    /// The engine applies exactly this sequence, so double and
    /// counter-clockwise turns are compositions of the one quarter-turn
    /// permutation rather than independent tables.
    #[must_use]
    pub fn cw_quarter_turns(self) -> SmallVec<[Face; 3]> {
        smallvec![self.face; self.direction.quarter_turn_count()]
    }

    /// All 18 distinct moves (6 faces x 3 directions).
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL.into_iter().flat_map(|face| {
            Direction::ALL
                .into_iter()
                .map(move |direction| Move::new(face, direction))
        })
    }
}
