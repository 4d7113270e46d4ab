//! Clockwise quarter-turn permutation tables.
//!
//! For each face, a turn permutes 20 facelets: the 8 non-center facelets of
//! the turned face itself (a 90-degree grid rotation) plus 12 edge facelets
//! on the 4 neighboring faces, cycled as 4 strips of 3.
//!
//! `RINGS[face][i]` lists strip `i` in receiving order: a clockwise turn
//! moves the content of strip `i` onto strip `i + 1` (mod 4), position `j`
//! onto position `j`. Strip coordinates follow the face orientation
//! convention documented on [`Face`].
//!
//! Only clockwise tables exist. Counter-clockwise and double turns are
//! compositions of the clockwise quarter turn, which makes the inverse and
//! double-turn laws hold by construction.

use crate::model::Face;

/// A facelet coordinate: `(face, row, col)`.
pub(crate) type Pos = (Face, usize, usize);

/// Edge-strip cycles per face, indexed by `Face::index()`.
pub(crate) const RINGS: [[[Pos; 3]; 4]; 6] = {
    use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        // Up: top rows cycle front -> left -> back -> right.
        [
            [(F, 0, 0), (F, 0, 1), (F, 0, 2)],
            [(L, 0, 0), (L, 0, 1), (L, 0, 2)],
            [(B, 0, 0), (B, 0, 1), (B, 0, 2)],
            [(R, 0, 0), (R, 0, 1), (R, 0, 2)],
        ],
        // Down: bottom rows cycle front -> right -> back -> left.
        [
            [(F, 2, 0), (F, 2, 1), (F, 2, 2)],
            [(R, 2, 0), (R, 2, 1), (R, 2, 2)],
            [(B, 2, 0), (B, 2, 1), (B, 2, 2)],
            [(L, 2, 0), (L, 2, 1), (L, 2, 2)],
        ],
        // Front: up bottom row -> right left column -> down top row
        // (reversed) -> left right column (reversed).
        [
            [(U, 2, 0), (U, 2, 1), (U, 2, 2)],
            [(R, 0, 0), (R, 1, 0), (R, 2, 0)],
            [(D, 0, 2), (D, 0, 1), (D, 0, 0)],
            [(L, 2, 2), (L, 1, 2), (L, 0, 2)],
        ],
        // Back: up top row -> left left column (reversed) -> down bottom row
        // (reversed) -> right right column.
        [
            [(U, 0, 0), (U, 0, 1), (U, 0, 2)],
            [(L, 2, 0), (L, 1, 0), (L, 0, 0)],
            [(D, 2, 2), (D, 2, 1), (D, 2, 0)],
            [(R, 0, 2), (R, 1, 2), (R, 2, 2)],
        ],
        // Left: up left column -> front left column -> down left column ->
        // back right column (reversed).
        [
            [(U, 0, 0), (U, 1, 0), (U, 2, 0)],
            [(F, 0, 0), (F, 1, 0), (F, 2, 0)],
            [(D, 0, 0), (D, 1, 0), (D, 2, 0)],
            [(B, 2, 2), (B, 1, 2), (B, 0, 2)],
        ],
        // Right: front right column -> up right column -> back left column
        // (reversed) -> down right column.
        [
            [(F, 0, 2), (F, 1, 2), (F, 2, 2)],
            [(U, 0, 2), (U, 1, 2), (U, 2, 2)],
            [(B, 2, 0), (B, 1, 0), (B, 0, 0)],
            [(D, 0, 2), (D, 1, 2), (D, 2, 2)],
        ],
    ]
};
