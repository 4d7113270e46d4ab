//! Facelet colors.
//!
//! A fixed 6-color palette, one color per face in the solved configuration.
//! The RGB values match the materials the visual shell assigns to each face.

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// All colors, in canonical order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Canonical index (0..6), stable across runs.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Packed RGB value for rendering (`0xRRGGBB`).
    #[must_use]
    pub const fn rgb(self) -> u32 {
        match self {
            Color::White => 0xFFFFFF,
            Color::Yellow => 0xFFFF00,
            Color::Green => 0x00FF00,
            Color::Blue => 0x0000FF,
            Color::Orange => 0xFF8000,
            Color::Red => 0xFF0000,
        }
    }

    /// Single-letter abbreviation used by the net display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Orange => "Orange",
            Color::Red => "Red",
        };
        write!(f, "{}", name)
    }
}
