//! Illustrative [`crate::search::Game`] implementers. Neither touches the
//! chess core; both exist to show that `search`/`best_move` are genuinely
//! generic over the game descriptor.

pub mod connect_four;
pub mod tic_tac_toe;
