//! Attack queries: "is this square attacked by a piece of this color?"
//!
//! Sliding attacks reuse [`crate::bits::ray`] directly instead of a
//! precomputed attack table: a ray fired from the target square stops at
//! the first blocker in each direction, and that blocker is an attacker
//! iff it belongs to the querying color and is a bishop/rook/queen of the
//! matching line kind. This is the same ray walk the move generator uses
//! to build sliding moves, just read from the far end.

use crate::bits::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS, ray};
use crate::board::{Color, Piece, Position};
use crate::moves::tables::{BLACK_PAWN_ATTACKS, KING_ATTACKS, KNIGHT_ATTACKS, WHITE_PAWN_ATTACKS};
use crate::square::Square;

/// Is `sq` attacked by any piece of `attacker`'s color in `position`?
pub fn is_square_attacked(position: &Position, sq: Square, attacker: Color) -> bool {
    let target = 1u64 << sq.index();

    // Pawn attacks are symmetric: squares a White pawn attacks *from* are
    // exactly the squares from which a pawn would attack *this* square, so
    // checking "is one of attacker's pawns on a square that attacks sq" is
    // the mirror-color lookup.
    let pawn_origin_mask = match attacker {
        Color::White => BLACK_PAWN_ATTACKS[sq.index() as usize],
        Color::Black => WHITE_PAWN_ATTACKS[sq.index() as usize],
    };
    if pawn_origin_mask & position.bb(attacker, Piece::Pawn) != 0 {
        return true;
    }

    if KNIGHT_ATTACKS[sq.index() as usize] & position.bb(attacker, Piece::Knight) != 0 {
        return true;
    }

    if KING_ATTACKS[sq.index() as usize] & position.bb(attacker, Piece::King) != 0 {
        return true;
    }

    let occupancy = position.occupancy_all();
    let rook_like = position.bb(attacker, Piece::Rook) | position.bb(attacker, Piece::Queen);
    if rook_like != 0 {
        for &dir in &ROOK_DIRECTIONS {
            if blocker_is_attacker(target, dir, occupancy, rook_like) {
                return true;
            }
        }
    }

    let bishop_like = position.bb(attacker, Piece::Bishop) | position.bb(attacker, Piece::Queen);
    if bishop_like != 0 {
        for &dir in &BISHOP_DIRECTIONS {
            if blocker_is_attacker(target, dir, occupancy, bishop_like) {
                return true;
            }
        }
    }

    false
}

/// Fire a ray from `origin` in `direction`; `ray` stops at (and includes)
/// the first occupied square, so that stop is the only bit of the result
/// that can intersect `occupancy` — check whether it belongs to `attacker_mask`.
fn blocker_is_attacker(origin: u64, direction: crate::bits::Direction, occupancy: u64, attacker_mask: u64) -> bool {
    let path = ray(origin, direction, occupancy);
    path & occupancy & attacker_mask != 0
}

/// Is `color`'s king currently attacked by the opponent?
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let king_sq = position.king_square(color);
    is_square_attacked(position, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_has_no_checks() {
        let p = Position::initial();
        assert!(!is_king_in_check(&p, Color::White));
        assert!(!is_king_in_check(&p, Color::Black));
    }

    #[test]
    fn rook_attacks_down_open_file() {
        let mut p = Position::new_empty();
        p.set_bb(Color::White, Piece::King, 1u64 << Square::from_rank_file(0, 4).index());
        p.set_bb(Color::Black, Piece::King, 1u64 << Square::from_rank_file(7, 7).index());
        p.set_bb(Color::Black, Piece::Rook, 1u64 << Square::from_rank_file(6, 4).index());
        assert!(is_king_in_check(&p, Color::White));
    }

    #[test]
    fn rook_does_not_attack_through_blocker() {
        let mut p = Position::new_empty();
        p.set_bb(Color::White, Piece::King, 1u64 << Square::from_rank_file(0, 4).index());
        p.set_bb(Color::Black, Piece::King, 1u64 << Square::from_rank_file(7, 7).index());
        p.set_bb(Color::Black, Piece::Rook, 1u64 << Square::from_rank_file(6, 4).index());
        p.set_bb(Color::White, Piece::Pawn, 1u64 << Square::from_rank_file(3, 4).index());
        assert!(!is_king_in_check(&p, Color::White));
    }

    #[test]
    fn bishop_attacks_diagonally() {
        let mut p = Position::new_empty();
        p.set_bb(Color::White, Piece::King, 1u64 << Square::from_rank_file(0, 4).index());
        p.set_bb(Color::Black, Piece::King, 1u64 << Square::from_rank_file(7, 7).index());
        p.set_bb(Color::Black, Piece::Bishop, 1u64 << Square::from_rank_file(4, 0).index());
        assert!(is_king_in_check(&p, Color::White));
    }

    #[test]
    fn knight_attack_detected() {
        let mut p = Position::new_empty();
        p.set_bb(Color::White, Piece::King, 1u64 << Square::from_rank_file(0, 4).index());
        p.set_bb(Color::Black, Piece::King, 1u64 << Square::from_rank_file(7, 7).index());
        p.set_bb(Color::Black, Piece::Knight, 1u64 << Square::from_rank_file(2, 3).index());
        assert!(is_king_in_check(&p, Color::White));
    }

    #[test]
    fn pawn_attack_detected() {
        let mut p = Position::new_empty();
        p.set_bb(Color::White, Piece::King, 1u64 << Square::from_rank_file(3, 4).index());
        p.set_bb(Color::Black, Piece::King, 1u64 << Square::from_rank_file(7, 7).index());
        p.set_bb(Color::Black, Piece::Pawn, 1u64 << Square::from_rank_file(4, 3).index());
        assert!(is_king_in_check(&p, Color::White));
    }
}
