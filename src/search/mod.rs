//! Generic alpha-beta search, decoupled from chess by the [`Game`] trait.
//!
//! `search` and `best_move` never mention a board or a piece. Everything
//! game-specific — how to enumerate moves, how to apply one, when a state is
//! terminal, how to score it, whose turn it is — comes through `Game`. The
//! chess engine is one implementer; [`crate::games`] ships two more as
//! illustrations that exercise the same search code.

use crate::tt::{CacheEntry, NodeType, TranspositionTable};
use tracing::{debug, trace, warn};

/// The capability bundle the search consumes. An implementer only needs to
/// describe its own state and move types and answer these questions; the
/// search loop itself is fixed.
pub trait Game {
    type State: Clone;
    type Move: Clone;

    /// All pseudo-legal (or legal, if the implementer folds legality into
    /// generation) moves available in `state`.
    fn generate_moves(state: &Self::State) -> Vec<Self::Move>;

    /// Apply `mv` to `state`. `None` means the move is rejected and the
    /// branch is skipped — the search never treats this as a hard error.
    fn apply_move(state: &Self::State, mv: &Self::Move) -> Option<Self::State>;

    fn is_terminal(state: &Self::State) -> bool;

    fn evaluate(state: &Self::State) -> i32;

    /// `1` for the maximizing side to move, `-1` for the minimizing side.
    fn player_to_move(state: &Self::State) -> i32;

    /// A hash of `state` suitable for bucketing it in a transposition table.
    /// Collisions are fine — [`TranspositionTable`] falls back to `State`'s
    /// own equality to disambiguate — but two equal states must hash equal.
    fn hash_state(state: &Self::State) -> u64;
}

/// Depth-first alpha-beta search over `Game::State`, optionally backed by a
/// transposition table keyed on `hash_key`/`state` equality.
///
/// Mirrors the reference control flow exactly: a cache hit at sufficient
/// depth narrows the window (or returns outright on a window collapse),
/// terminal and zero-move states are evaluated and stored as `Exact`, and
/// the final node type is classified against the window the call *started*
/// with, not the one narrowed during the recursion.
pub fn search<G: Game>(
    state: &G::State,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    mut cache: Option<&mut TranspositionTable<G::State, CacheEntry>>,
) -> i32
where
    G::State: PartialEq,
{
    let hash_key = G::hash_state(state);
    let alpha_orig = alpha;
    let beta_orig = beta;

    if let Some(table) = cache.as_deref() {
        if let Some(entry) = table.lookup(hash_key, state) {
            if entry.depth >= depth {
                match entry.node_type {
                    NodeType::Exact => {
                        trace!(hash_key, value = entry.value, "cache hit, exact");
                        return entry.value;
                    }
                    NodeType::LowerBound => alpha = alpha.max(entry.value),
                    NodeType::UpperBound => beta = beta.min(entry.value),
                }
                if alpha >= beta {
                    trace!(hash_key, alpha, beta, "cache-narrowed window collapsed");
                    return entry.value;
                }
            }
        }
    }

    if G::is_terminal(state) || depth == 0 {
        let eval = G::evaluate(state);
        store(cache.as_deref_mut(), hash_key, state, eval, depth, NodeType::Exact);
        return eval;
    }

    let moves = G::generate_moves(state);
    if moves.is_empty() {
        let eval = G::evaluate(state);
        store(cache.as_deref_mut(), hash_key, state, eval, depth, NodeType::Exact);
        return eval;
    }

    let maximizing = G::player_to_move(state) == 1;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in &moves {
        let Some(next) = G::apply_move(state, mv) else {
            continue;
        };
        let value = search::<G>(&next, depth - 1, alpha, beta, cache.as_deref_mut());

        if maximizing {
            if value > best {
                best = value;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if value < best {
                best = value;
            }
            if best < beta {
                beta = best;
            }
        }

        if alpha >= beta {
            break;
        }
    }

    let node_type = if best <= alpha_orig {
        NodeType::UpperBound
    } else if best >= beta_orig {
        NodeType::LowerBound
    } else {
        NodeType::Exact
    };
    store(cache, hash_key, state, best, depth, node_type);
    best
}

fn store<S: Clone + PartialEq>(
    cache: Option<&mut TranspositionTable<S, CacheEntry>>,
    hash_key: u64,
    state: &S,
    value: i32,
    depth: u32,
    node_type: NodeType,
) {
    if let Some(table) = cache {
        table.store(hash_key, state.clone(), CacheEntry { value, depth, node_type, best_move: None });
    }
}

/// Find the best move from `state` by trying each pseudo-legal move at the
/// top level and recursing with [`search`] on the result. Returns `None` if
/// `state` is terminal or if every move is rejected by the applicator.
pub fn best_move<G: Game>(
    state: &G::State,
    depth: u32,
    mut cache: Option<&mut TranspositionTable<G::State, CacheEntry>>,
) -> Option<G::Move>
where
    G::State: PartialEq,
{
    if G::is_terminal(state) {
        return None;
    }

    let moves = G::generate_moves(state);
    if moves.is_empty() {
        warn!("no moves available in best_move despite a non-terminal state");
        return None;
    }

    let maximizing = G::player_to_move(state) == 1;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best: Option<G::Move> = None;

    for mv in &moves {
        let Some(next) = G::apply_move(state, mv) else {
            continue;
        };
        let value = search::<G>(&next, depth - 1, alpha, beta, cache.as_deref_mut());

        if maximizing {
            if value > best_value {
                best_value = value;
                best = Some(mv.clone());
                debug!(best_value, "new best move for maximizer");
            }
            if best_value > alpha {
                alpha = best_value;
            }
        } else {
            if value < best_value {
                best_value = value;
                best = Some(mv.clone());
                debug!(best_value, "new best move for minimizer");
            }
            if best_value < beta {
                beta = best_value;
            }
        }

        if alpha >= beta {
            debug!(alpha, beta, "alpha-beta cutoff in best_move");
            break;
        }
    }

    if best.is_none() {
        warn!("every candidate move was rejected by the applicator");
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    // A depth-bounded game over an i32 counter: moves are +1/-1, evaluation
    // is the counter itself, terminal at |state| >= 2. Exercises the
    // maximizer/minimizer split and alpha-beta pruning without any chess
    // machinery.
    struct CounterGame;

    impl Game for CounterGame {
        type State = i32;
        type Move = i32;

        fn generate_moves(state: &i32) -> Vec<i32> {
            if state.abs() >= 2 {
                vec![]
            } else {
                vec![1, -1]
            }
        }

        fn apply_move(state: &i32, mv: &i32) -> Option<i32> {
            Some(state + mv)
        }

        fn is_terminal(state: &i32) -> bool {
            state.abs() >= 2
        }

        fn evaluate(state: &i32) -> i32 {
            *state
        }

        fn player_to_move(state: &i32) -> i32 {
            if state % 2 == 0 { 1 } else { -1 }
        }

        fn hash_state(state: &i32) -> u64 {
            *state as u64
        }
    }

    #[test]
    fn search_matches_without_cache() {
        let value = search::<CounterGame>(&0, 4, i32::MIN, i32::MAX, None);
        assert_eq!(value, 0);
    }

    #[test]
    fn search_agrees_with_and_without_transposition_table() {
        let without = search::<CounterGame>(&0, 4, i32::MIN, i32::MAX, None);
        let mut table: TranspositionTable<i32, CacheEntry> = TranspositionTable::new(64);
        let with = search::<CounterGame>(&0, 4, i32::MIN, i32::MAX, Some(&mut table));
        assert_eq!(without, with);
    }

    #[test]
    fn best_move_is_none_on_terminal_state() {
        assert_eq!(best_move::<CounterGame>(&2, 3, None), None);
    }

    #[test]
    fn best_move_score_matches_top_level_search() {
        let depth = 3;
        let mv = best_move::<CounterGame>(&0, depth, None).expect("non-terminal state has moves");
        let next = CounterGame::apply_move(&0, &mv).unwrap();
        let score_of_move = search::<CounterGame>(&next, depth - 1, i32::MIN, i32::MAX, None);
        let top_level = search::<CounterGame>(&0, depth, i32::MIN, i32::MAX, None);
        assert_eq!(score_of_move, top_level);
    }
}
