//! Tic-tac-toe: the smallest possible [`crate::search::Game`] implementer,
//! exhaustively searchable to a forced result at every depth.

use crate::search::Game;
use serde::{Deserialize, Serialize};

/// `1` = X, `-1` = O, `0` = empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: [i8; 9],
    next_player: i8,
}

impl TicTacToeState {
    pub fn empty() -> Self {
        TicTacToeState { board: [0; 9], next_player: 1 }
    }
}

/// A board position, `0..9`, row-major (`pos / 3` row, `pos % 3` column).
pub type Move = usize;

pub struct TicTacToeGame;

fn check_winner(st: &TicTacToeState) -> i8 {
    let b = &st.board;
    for r in 0..3 {
        let sum = b[r * 3] as i32 + b[r * 3 + 1] as i32 + b[r * 3 + 2] as i32;
        if sum == 3 {
            return 1;
        }
        if sum == -3 {
            return -1;
        }
    }
    for c in 0..3 {
        let sum = b[c] as i32 + b[c + 3] as i32 + b[c + 6] as i32;
        if sum == 3 {
            return 1;
        }
        if sum == -3 {
            return -1;
        }
    }
    let diag1 = b[0] as i32 + b[4] as i32 + b[8] as i32;
    let diag2 = b[2] as i32 + b[4] as i32 + b[6] as i32;
    if diag1 == 3 || diag2 == 3 {
        return 1;
    }
    if diag1 == -3 || diag2 == -3 {
        return -1;
    }
    0
}

impl Game for TicTacToeGame {
    type State = TicTacToeState;
    type Move = Move;

    fn generate_moves(state: &TicTacToeState) -> Vec<Move> {
        (0..9).filter(|&i| state.board[i] == 0).collect()
    }

    fn apply_move(state: &TicTacToeState, mv: &Move) -> Option<TicTacToeState> {
        if state.board[*mv] != 0 {
            return None;
        }
        let mut next = state.clone();
        next.board[*mv] = state.next_player;
        next.next_player = -state.next_player;
        Some(next)
    }

    fn is_terminal(state: &TicTacToeState) -> bool {
        check_winner(state) != 0 || state.board.iter().all(|&cell| cell != 0)
    }

    fn evaluate(state: &TicTacToeState) -> i32 {
        match check_winner(state) {
            1 => 100,
            -1 => -100,
            _ => 0,
        }
    }

    fn player_to_move(state: &TicTacToeState) -> i32 {
        state.next_player as i32
    }

    fn hash_state(state: &TicTacToeState) -> u64 {
        let mut h = 0u64;
        for &cell in &state.board {
            h = (h << 3) ^ (cell as i64 + 2) as u64;
        }
        h ^= (state.next_player & 0xF) as u64;
        h
    }
}
