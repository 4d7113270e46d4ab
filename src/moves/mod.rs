//! Move values and notation.

pub mod notation;
pub mod turn;

pub use notation::{format_sequence, InvalidMoveError};
pub use turn::{Direction, Move};
