//! A compact 0..63 board-square index.
//!
//! Index layout: `rank * 8 + file`, where `a1 = 0` and `h8 = 63`, matching
//! the bit layout of the piece bitboards in [`crate::board`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 64 squares of the board, stored as a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Build a square from a 0..63 index. Panics in debug builds if out of range.
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Build a square from rank and file, both 0..7 (`rank 0` = White's back rank).
    #[inline(always)]
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        Square::from_index(rank * 8 + file)
    }

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }
}

impl TryFrom<u64> for Square {
    type Error = ();

    /// Recover the square from a single-bit mask (as produced by `1u64 << idx`).
    fn try_from(bit: u64) -> Result<Self, Self::Error> {
        if bit == 0 || !bit.is_power_of_two() {
            return Err(());
        }
        Ok(Square::from_index(bit.trailing_zeros() as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            self.rank() + 1
        )
    }
}
