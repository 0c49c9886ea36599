//! Window scoring over every four-cell line.

use dropfour_core::{Board, Line, Player, line_table};

use crate::config::EvalWeights;

/// Own, opponent, and empty counts inside one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowCounts {
    pub own: u8,
    pub opp: u8,
    pub empty: u8,
}

impl WindowCounts {
    pub fn of(board: &Board, line: &Line, player: Player) -> WindowCounts {
        let mut counts = WindowCounts::default();
        for &(r, c) in line.cells() {
            match board.mark(r, c) {
                Some(p) if p == player => counts.own += 1,
                Some(_) => counts.opp += 1,
                None => counts.empty += 1,
            }
        }
        counts
    }
}

/// Score one window for `player`.
pub fn score_window(counts: WindowCounts, weights: &EvalWeights) -> i32 {
    match (counts.own, counts.opp, counts.empty) {
        (4, 0, 0) => weights.win,
        (3, 0, 1) => weights.three,
        (2, 0, 2) => weights.two,
        (0, 3, 1) => -weights.opp_three,
        (0, 2, 2) => -weights.opp_two,
        _ => 0,
    }
}

/// Sum of [`score_window`] over all lines on the board.
pub fn evaluate_windows(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    line_table()
        .all()
        .iter()
        .map(|line| score_window(WindowCounts::of(board, line, player), weights))
        .sum()
}
