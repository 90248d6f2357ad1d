//! The move representation shared by the generator and the applicator.
//!
//! A move carries only what the applicator cannot recover by inspection:
//! origin, destination, promotion choice, and the two flags (castling,
//! en passant) that select a dispatch path in [`super::apply`]. The moved
//! piece itself is deliberately absent — the applicator recovers it by
//! scanning which of the mover's six bitboards holds `from`.

use crate::board::Piece;
use crate::square::Square;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A pseudo-legal move. Legality (king safety, castling-through-check) is
/// decided entirely by [`super::apply::apply_move`]; the generator never
/// filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn quiet(from: Square, to: Square) -> Self {
        Move { from, to, promotion: None, is_castling: false, is_en_passant: false }
    }

    pub fn promotion(from: Square, to: Square, promotion: Piece) -> Self {
        Move { from, to, promotion: Some(promotion), is_castling: false, is_en_passant: false }
    }

    pub fn castling(from: Square, to: Square) -> Self {
        Move { from, to, promotion: None, is_castling: true, is_en_passant: false }
    }

    pub fn en_passant(from: Square, to: Square) -> Self {
        Move { from, to, promotion: None, is_castling: false, is_en_passant: true }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            let c = match promo {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                _ => '?',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A move-collection sink generic over its backing storage, so the
/// generator can fill either a heap `Vec` or a fixed-capacity [`ArrayVec`]
/// without duplicating its traversal code.
pub trait MoveBuffer: Deref<Target = [Move]> + DerefMut {
    fn push(&mut self, mv: Move);
    fn clear(&mut self);
}

impl MoveBuffer for Vec<Move> {
    fn push(&mut self, mv: Move) {
        Vec::push(self, mv);
    }
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<const N: usize> MoveBuffer for ArrayVec<Move, N> {
    fn push(&mut self, mv: Move) {
        ArrayVec::push(self, mv);
    }
    fn clear(&mut self) {
        ArrayVec::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_uci_style() {
        let m = Move::promotion(Square::from_index(12), Square::from_index(20), Piece::Queen);
        assert_eq!(m.to_string(), "e2e3q");
    }

    #[test]
    fn buffer_trait_works_over_vec_and_arrayvec() {
        fn fill(buf: &mut impl MoveBuffer) {
            buf.push(Move::quiet(Square::from_index(0), Square::from_index(1)));
        }
        let mut v: Vec<Move> = Vec::new();
        fill(&mut v);
        assert_eq!(v.len(), 1);

        let mut a: ArrayVec<Move, 4> = ArrayVec::new();
        fill(&mut a);
        assert_eq!(a.len(), 1);
    }
}
