//! Deterministic scramble generation.

pub mod generator;
pub mod rng;

pub use generator::{Scrambler, DEFAULT_SCRAMBLE_LENGTH};
pub use rng::ScrambleRng;
