//! Connect Four: a 6-row by 7-column drop game, with the column-window
//! evaluation heuristic and center-column preference.

use crate::search::Game;
use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
const SIZE: usize = ROWS * COLS;

/// `1` for the first player, `-1` for the second, `0` for empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFourState {
    board: [i8; SIZE],
    next_player: i8,
}

impl ConnectFourState {
    pub fn empty() -> Self {
        ConnectFourState { board: [0; SIZE], next_player: 1 }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> i8 {
        self.board[row * COLS + col]
    }

    fn is_column_full(&self, col: usize) -> bool {
        self.at(0, col) != 0
    }

    /// The lowest empty row in `col`, or `None` if the column is full.
    fn free_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&r| self.at(r, col) == 0)
    }
}

/// A column index, `0..COLS`.
pub type Move = usize;

pub struct ConnectFourGame;

fn check_winner(st: &ConnectFourState) -> i8 {
    for r in 0..ROWS {
        for c in 0..=COLS - 4 {
            let sum: i32 = (0..4).map(|k| st.at(r, c + k) as i32).sum();
            if sum == 4 {
                return 1;
            }
            if sum == -4 {
                return -1;
            }
        }
    }
    for c in 0..COLS {
        for r in 0..=ROWS - 4 {
            let sum: i32 = (0..4).map(|k| st.at(r + k, c) as i32).sum();
            if sum == 4 {
                return 1;
            }
            if sum == -4 {
                return -1;
            }
        }
    }
    for r in 0..=ROWS - 4 {
        for c in 0..=COLS - 4 {
            let sum: i32 = (0..4).map(|k| st.at(r + k, c + k) as i32).sum();
            if sum == 4 {
                return 1;
            }
            if sum == -4 {
                return -1;
            }
        }
    }
    for r in 3..ROWS {
        for c in 0..=COLS - 4 {
            let sum: i32 = (0..4).map(|k| st.at(r - k, c + k) as i32).sum();
            if sum == 4 {
                return 1;
            }
            if sum == -4 {
                return -1;
            }
        }
    }
    0
}

fn evaluate_window(cells: [i8; 4]) -> i32 {
    let count_x = cells.iter().filter(|&&v| v == 1).count();
    let count_o = cells.iter().filter(|&&v| v == -1).count();
    let mut score = 0;
    if count_x == 4 {
        score += 100;
    } else if count_x == 3 && count_o == 0 {
        score += 5;
    } else if count_x == 2 && count_o == 0 {
        score += 2;
    }
    if count_o == 4 {
        score -= 100;
    } else if count_o == 3 && count_x == 0 {
        score -= 5;
    } else if count_o == 2 && count_x == 0 {
        score -= 2;
    }
    score
}

impl Game for ConnectFourGame {
    type State = ConnectFourState;
    type Move = Move;

    fn generate_moves(state: &ConnectFourState) -> Vec<Move> {
        (0..COLS).filter(|&c| !state.is_column_full(c)).collect()
    }

    fn apply_move(state: &ConnectFourState, mv: &Move) -> Option<ConnectFourState> {
        let row = state.free_row(*mv)?;
        let mut next = state.clone();
        next.board[row * COLS + mv] = state.next_player;
        next.next_player = -state.next_player;
        Some(next)
    }

    fn is_terminal(state: &ConnectFourState) -> bool {
        check_winner(state) != 0 || (0..COLS).all(|c| state.is_column_full(c))
    }

    fn evaluate(state: &ConnectFourState) -> i32 {
        let winner = check_winner(state);
        if winner == 1 {
            return 100;
        }
        if winner == -1 {
            return -100;
        }

        let mut score = 0;
        for r in 0..ROWS {
            for c in 0..=COLS - 4 {
                score += evaluate_window([state.at(r, c), state.at(r, c + 1), state.at(r, c + 2), state.at(r, c + 3)]);
            }
        }
        for c in 0..COLS {
            for r in 0..=ROWS - 4 {
                score += evaluate_window([state.at(r, c), state.at(r + 1, c), state.at(r + 2, c), state.at(r + 3, c)]);
            }
        }
        for r in 0..=ROWS - 4 {
            for c in 0..=COLS - 4 {
                score += evaluate_window([
                    state.at(r, c),
                    state.at(r + 1, c + 1),
                    state.at(r + 2, c + 2),
                    state.at(r + 3, c + 3),
                ]);
            }
        }
        for r in 3..ROWS {
            for c in 0..=COLS - 4 {
                score += evaluate_window([
                    state.at(r, c),
                    state.at(r - 1, c + 1),
                    state.at(r - 2, c + 2),
                    state.at(r - 3, c + 3),
                ]);
            }
        }

        let center = COLS / 2;
        for r in 0..ROWS {
            match state.at(r, center) {
                1 => score += 3,
                -1 => score -= 3,
                _ => {}
            }
        }
        score
    }

    fn player_to_move(state: &ConnectFourState) -> i32 {
        state.next_player as i32
    }

    fn hash_state(state: &ConnectFourState) -> u64 {
        // FNV-1a over the cells plus the player to move.
        let mut h: u64 = 14695981039346656037;
        for &cell in &state.board {
            h ^= (cell as i64 + 2) as u64;
            h = h.wrapping_mul(1099511628211);
        }
        h ^= (state.next_player & 0x0F) as u64;
        h.wrapping_mul(1099511628211)
    }
}
