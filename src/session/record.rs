//! Recorded moves for history tracking.

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// A settled move with its position in the session's move order.
///
/// Used for:
/// - undo / history-based solving
/// - replay and debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// Zero-based position in the session's application order.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, sequence: u32) -> Self {
        Self { mv, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Face;
    use crate::moves::Direction;

    #[test]
    fn test_record_fields() {
        let mv = Move::new(Face::Right, Direction::Double);
        let record = MoveRecord::new(mv, 3);

        assert_eq!(record.mv, mv);
        assert_eq!(record.sequence, 3);
    }

    #[test]
    fn test_serialization() {
        let record = MoveRecord::new(Move::new(Face::Up, Direction::CounterClockwise), 7);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
