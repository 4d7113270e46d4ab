//! Singmaster notation: `U`, `U'`, `U2`, parsed to and from [`Move`].
//!
//! This is the boundary where untyped input (text, UI identifiers) enters the
//! typed move domain. Inside the crate a `Move` is valid by construction, so
//! [`InvalidMoveError`] can only arise here and in the `Face`/`Direction`
//! lookup helpers.

use thiserror::Error;

use super::turn::{Direction, Move};
use crate::model::Face;

/// A face or direction symbol outside the enumerated set.
///
/// Like [`OutOfRangeError`](crate::model::OutOfRangeError), this indicates a
/// caller bug: the presentation layer passed an identifier the core never
/// defined.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("unknown face `{0}`")]
    UnknownFace(String),
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
    #[error("empty move token")]
    EmptyToken,
}

impl Direction {
    /// Look up a direction from an untyped identifier.
    ///
    /// Accepts the notation suffixes (`""`, `"'"`, `"2"`) and the spelled-out
    /// names the visual shell's buttons use.
    pub fn from_name(name: &str) -> Result<Direction, InvalidMoveError> {
        match name.to_ascii_lowercase().as_str() {
            "" | "cw" | "clockwise" => Ok(Direction::Clockwise),
            "'" | "ccw" | "counterclockwise" | "counter-clockwise" => {
                Ok(Direction::CounterClockwise)
            }
            "2" | "180" | "double" => Ok(Direction::Double),
            _ => Err(InvalidMoveError::UnknownDirection(name.to_string())),
        }
    }

    /// Notation suffix for this direction.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
            Direction::Double => "2",
        }
    }
}

impl Move {
    /// Parse a single notation token, e.g. `R`, `R'`, `R2`.
    pub fn parse(token: &str) -> Result<Move, InvalidMoveError> {
        let mut chars = token.chars();
        let face_char = chars.next().ok_or(InvalidMoveError::EmptyToken)?;
        let face = Face::from_letter(face_char)?;
        let direction = Direction::from_name(chars.as_str())?;
        Ok(Move::new(face, direction))
    }

    /// Parse a whitespace-separated sequence, e.g. `"R U R' U'"`.
    pub fn parse_sequence(input: &str) -> Result<Vec<Move>, InvalidMoveError> {
        input.split_whitespace().map(Move::parse).collect()
    }

    /// Build a move from untyped face and direction identifiers.
    ///
    /// The entry point for the visual shell: its rotation buttons report
    /// strings like `("front", "clockwise")`.
    pub fn from_names(face: &str, direction: &str) -> Result<Move, InvalidMoveError> {
        Ok(Move::new(Face::from_name(face)?, Direction::from_name(direction)?))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.direction.suffix())
    }
}

impl std::str::FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

/// Format a move sequence in notation, e.g. `"R U R' U'"`.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
