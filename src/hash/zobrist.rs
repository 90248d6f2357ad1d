//! Zobrist key table and the `hash`/`equals` operations built on it.
//!
//! Key generation uses a hand-rolled xorshift64 generator seeded from a
//! process-start timestamp XORed into a fixed constant, not a general-
//! purpose RNG crate — this is the one place in the repository that rolls
//! its own PRNG, because the key schedule only needs 64 bits of spread per
//! slot and determinism-on-demand (see [`deterministic_seed`]) matters more
//! than statistical quality.

use crate::board::{ALL_COLORS, ALL_PIECES, Position};
use once_cell::sync::Lazy;

const FIXED_CONSTANT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A minimal xorshift64 generator. Not cryptographically strong; adequate
/// for spreading Zobrist keys across the 64-bit space.
struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        Xorshift64 { state: if seed == 0 { FIXED_CONSTANT } else { seed } }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

#[cfg(feature = "deterministic_zobrist")]
fn seed() -> u64 {
    FIXED_CONSTANT
}

#[cfg(not(feature = "deterministic_zobrist"))]
fn seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ FIXED_CONSTANT
}

/// `piece[color][piece][square]`, `castling[0..16]` indexed by the raw
/// castling-rights byte, `en_passant[0..64]` indexed by target square,
/// and one `side_to_move` key XORed in only when it is Black's turn.
struct ZobristKeys {
    piece: [[[u64; 64]; 6]; 2],
    castling: [u64; 16],
    en_passant: [u64; 64],
    side_to_move: u64,
}

fn generate_keys() -> ZobristKeys {
    let mut rng = Xorshift64::new(seed());
    let mut piece = [[[0u64; 64]; 6]; 2];
    for color_keys in piece.iter_mut() {
        for piece_keys in color_keys.iter_mut() {
            for key in piece_keys.iter_mut() {
                *key = rng.next_u64();
            }
        }
    }
    let mut castling = [0u64; 16];
    for key in castling.iter_mut() {
        *key = rng.next_u64();
    }
    let mut en_passant = [0u64; 64];
    for key in en_passant.iter_mut() {
        *key = rng.next_u64();
    }
    let side_to_move = rng.next_u64();
    ZobristKeys { piece, castling, en_passant, side_to_move }
}

/// Process-wide key table. Initializes lazily on first use; every later
/// access reuses the same tables, making repeated "initialization" a no-op.
static KEYS: Lazy<ZobristKeys> = Lazy::new(generate_keys);

/// Compute the Zobrist hash of `position`.
pub fn hash(position: &Position) -> u64 {
    let keys = &*KEYS;
    let mut h = 0u64;

    for &color in &ALL_COLORS {
        for &piece in &ALL_PIECES {
            let mut bb = position.bb(color, piece);
            while bb != 0 {
                let sq = bb.trailing_zeros() as usize;
                bb &= bb - 1;
                h ^= keys.piece[color as usize][piece as usize][sq];
            }
        }
    }

    h ^= keys.castling[(position.castling_rights & 0b1111) as usize];

    if let Some(ep) = position.en_passant {
        h ^= keys.en_passant[ep.index() as usize];
    }

    if position.side_to_move == crate::board::Color::Black {
        h ^= keys.side_to_move;
    }

    h
}

/// Field-by-field equality of every bitboard and scalar field. Two
/// positions that hash equal but differ in some field are still
/// distinguished here, which is how the transposition table resolves
/// collisions.
pub fn equals(p: &Position, q: &Position) -> bool {
    p == q
}
