//! Face-turn application: permutation tables and the pure apply transform.

pub mod apply;
pub(crate) mod tables;

pub use apply::MoveEngine;
