//! Center-weighted positional term.

use dropfour_core::{Board, COLS, Player, ROWS};

use crate::config::EvalWeights;

/// Own table values minus opponent table values over every occupied cell.
pub fn evaluate_positional(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    for r in 0..ROWS {
        for c in 0..COLS {
            match board.mark(r, c) {
                Some(p) if p == player => score += weights.position[r][c],
                Some(_) => score -= weights.position[r][c],
                None => {}
            }
        }
    }
    score
}
