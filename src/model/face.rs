//! Cube faces.
//!
//! ## Orientation convention
//!
//! Every face is read as a 3x3 grid viewed from outside the cube:
//!
//! - `Up` with the back edge as row 0 (rows run back to front)
//! - `Down` with the front edge as row 0 (rows run front to back)
//! - `Front`, `Left`, `Right`, `Back` with the top edge as row 0
//! - `Back` is viewed from behind the cube, `Left` from the left, `Right`
//!   from the right; columns always run left to right in that view
//!
//! This is the standard unfolded-net convention; the move engine's
//! permutation tables are written against it.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::moves::InvalidMoveError;

/// One of the six cube faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// All faces, in canonical order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Canonical index (0..6), used to index per-face storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face on the opposite side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// The color this face carries in the solved configuration.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }

    /// Singmaster letter for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Look up a face from its Singmaster letter (case-insensitive).
    pub fn from_letter(letter: char) -> Result<Face, InvalidMoveError> {
        match letter.to_ascii_uppercase() {
            'U' => Ok(Face::Up),
            'D' => Ok(Face::Down),
            'F' => Ok(Face::Front),
            'B' => Ok(Face::Back),
            'L' => Ok(Face::Left),
            'R' => Ok(Face::Right),
            other => Err(InvalidMoveError::UnknownFace(other.to_string())),
        }
    }

    /// Look up a face from an untyped identifier ("up", "front", "U", ...).
    ///
    /// This is the boundary where the visual shell's string button ids enter
    /// the typed domain.
    pub fn from_name(name: &str) -> Result<Face, InvalidMoveError> {
        match name.to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Face::Up),
            "d" | "down" => Ok(Face::Down),
            "f" | "front" => Ok(Face::Front),
            "b" | "back" => Ok(Face::Back),
            "l" | "left" => Ok(Face::Left),
            "r" | "right" => Ok(Face::Right),
            _ => Err(InvalidMoveError::UnknownFace(name.to_string())),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
