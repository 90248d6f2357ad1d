//! The chess instantiation of the generic search: a [`Game`] implementer
//! wiring [`Position`]/[`Move`] into `search`/`best_move` unchanged.

pub mod eval;

use crate::board::Position;
use crate::hash::zobrist;
use crate::moves::types::Move;
use crate::moves::{apply_move, pseudo_legal_moves};
use crate::search::Game;

/// Zero-sized marker type implementing [`Game`] for standard chess.
pub struct ChessGame;

impl Game for ChessGame {
    type State = Position;
    type Move = Move;

    fn generate_moves(state: &Position) -> Vec<Move> {
        pseudo_legal_moves(state)
    }

    fn apply_move(state: &Position, mv: &Move) -> Option<Position> {
        apply_move(state, *mv)
    }

    fn is_terminal(state: &Position) -> bool {
        eval::is_terminal(state)
    }

    fn evaluate(state: &Position) -> i32 {
        eval::evaluate(state)
    }

    fn player_to_move(state: &Position) -> i32 {
        eval::player_to_move(state)
    }

    fn hash_state(state: &Position) -> u64 {
        zobrist::hash(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{best_move, search};

    #[test]
    fn search_from_start_position_does_not_panic_at_shallow_depth() {
        let p = Position::initial();
        let value = search::<ChessGame>(&p, 2, i32::MIN, i32::MAX, None);
        // Symmetric opening position, shallow search: no side has a forced
        // material edge yet.
        assert_eq!(value, 0);
    }

    #[test]
    fn best_move_from_start_position_returns_a_pseudo_legal_move() {
        let p = Position::initial();
        let mv = best_move::<ChessGame>(&p, 2, None).expect("start position has moves");
        assert!(pseudo_legal_moves(&p).contains(&mv));
    }

    #[test]
    fn best_move_score_matches_top_level_search() {
        let p = Position::initial();
        let depth = 2;
        let mv = best_move::<ChessGame>(&p, depth, None).expect("start position has moves");
        let next = apply_move(&p, mv).expect("best_move must return an applicable move");
        let score_of_move = search::<ChessGame>(&next, depth - 1, i32::MIN, i32::MAX, None);
        let top_level = search::<ChessGame>(&p, depth, i32::MIN, i32::MAX, None);
        assert_eq!(score_of_move, top_level);
    }
}
