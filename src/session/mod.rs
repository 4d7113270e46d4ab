//! Presentation-shell session state: the current model, the serialized move
//! queue, and the move history.

pub mod record;
pub mod state;

pub use record::MoveRecord;
pub use state::CubeSession;
