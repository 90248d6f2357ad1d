//! Zobrist hashing: the position-to-u64 key discipline the transposition
//! table uses both to bucket entries and, via [`Position`]'s own equality,
//! to resolve collisions.

pub mod zobrist;

pub use zobrist::{equals, hash};
