//! The authoritative cube state: 54 facelet colors.
//!
//! ## Invariants
//!
//! - Each of the 6 colors appears exactly 9 times across the 54 facelets.
//! - The model is never mutated in place by callers: every move produces a
//!   fresh `CubeModel` via the move engine, so observers only ever see fully
//!   consistent grids.
//!
//! The model tracks symbolic facelet colors indexed by `(face, row, col)`;
//! it knows nothing about 3D positions or rendering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;
use super::face::Face;

/// Grid side length of one face.
pub const GRID_SIZE: usize = 3;

/// Total facelet count (6 faces of 3x3).
pub const FACELET_COUNT: usize = 54;

/// A facelet coordinate was outside the 3x3 grid.
///
/// This is a caller bug (contract violation), not a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("facelet coordinate ({row}, {col}) outside the 3x3 grid")]
pub struct OutOfRangeError {
    pub row: usize,
    pub col: usize,
}

/// Combinatorial state of a 3x3x3 cube.
///
/// Create with [`CubeModel::solved`]; derive new states through
/// `MoveEngine::apply`. There are no other mutation entry points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubeModel {
    /// Facelet colors, indexed `[Face::index()][row][col]`.
    faces: [[[Color; GRID_SIZE]; GRID_SIZE]; 6],
}

impl CubeModel {
    /// The canonical solved configuration: each face monochrome in its
    /// home color.
    #[must_use]
    pub fn solved() -> Self {
        let mut faces = [[[Color::White; GRID_SIZE]; GRID_SIZE]; 6];
        for face in Face::ALL {
            faces[face.index()] = [[face.solved_color(); GRID_SIZE]; GRID_SIZE];
        }
        Self { faces }
    }

    /// Color at `(face, row, col)`.
    ///
    /// Fails with [`OutOfRangeError`] if `row` or `col` is outside `0..3`.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Result<Color, OutOfRangeError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(OutOfRangeError { row, col });
        }
        Ok(self.faces[face.index()][row][col])
    }

    /// Whether every face is monochrome in its home color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Count of each color among the 54 facelets, indexed by `Color::index()`.
    ///
    /// A valid model always reports `[9; 6]`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for (_, _, _, color) in self.facelets() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Iterate over all 54 facelets as `(face, row, col, color)`.
    ///
    /// This is the renderable-description seam: the scene adapter maps each
    /// entry to a colored cell at a 3D position without the core ever
    /// depending on rendering types.
    pub fn facelets(&self) -> impl Iterator<Item = (Face, usize, usize, Color)> + '_ {
        Face::ALL.into_iter().flat_map(move |face| {
            (0..GRID_SIZE).flat_map(move |row| {
                (0..GRID_SIZE).map(move |col| (face, row, col, self.faces[face.index()][row][col]))
            })
        })
    }

    /// Borrow one face's grid. Internal; the engine reads source grids here.
    pub(crate) fn grid(&self, face: Face) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.faces[face.index()]
    }

    /// Write one facelet. Internal; only the engine builds next states.
    pub(crate) fn set(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face.index()][row][col] = color;
    }
}

/// Unfolded-net rendering, one letter per facelet:
///
/// ```text
///       W W W
///       W W W
///       W W W
/// O O O G G G R R R B B B
/// ...
///       Y Y Y
/// ```
impl std::fmt::Display for CubeModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row_str = |face: Face, row: usize| -> String {
            self.faces[face.index()][row]
                .iter()
                .map(|c| c.letter().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        for row in 0..GRID_SIZE {
            writeln!(f, "      {}", row_str(Face::Up, row))?;
        }
        for row in 0..GRID_SIZE {
            writeln!(
                f,
                "{} {} {} {}",
                row_str(Face::Left, row),
                row_str(Face::Front, row),
                row_str(Face::Right, row),
                row_str(Face::Back, row),
            )?;
        }
        for row in 0..GRID_SIZE {
            writeln!(f, "      {}", row_str(Face::Down, row))?;
        }
        Ok(())
    }
}
