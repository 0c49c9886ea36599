//! One-ply trap look-ahead.

use dropfour_core::{Board, Player};

use crate::config::EvalWeights;

/// Return `true` if `player` dropping into `column` lets the opponent win by
/// dropping straight on top of it.
///
/// A drop that wins outright is never a trap.
pub fn opens_win_above(board: &Board, column: usize, player: Player) -> bool {
    let Ok(landing) = board.apply(column, player) else {
        return false;
    };
    if landing.board.wins_at(landing.row, column, player) {
        return false;
    }
    landing.board.is_winning_drop(column, player.opponent())
}

/// `-trap_penalty` for each playable column that would be a trap for `player`.
pub fn evaluate_safety(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let traps = board
        .legal_columns()
        .iter()
        .filter(|&c| opens_win_above(board, c, player))
        .count() as i32;
    -traps * weights.trap_penalty
}
