//! Everything related to moves: the `Move` value type, pseudo-legal
//! generation, attack queries, and legality-filtered application.

pub mod apply;
pub mod attacks;
pub mod movegen;
pub mod tables;
pub mod types;

pub use apply::apply_move;
pub use movegen::{generate_moves, pseudo_legal_moves};
pub use types::Move;
