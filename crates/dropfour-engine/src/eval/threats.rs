//! Open-three detection: three marks plus an empty cell that can be filled
//! on the very next drop.

use dropfour_core::{Board, COLS, Player, line_table};

use crate::config::EvalWeights;

/// Bitmask of the distinct playable cells that would complete a line for
/// `player`. Bit `row * 7 + col` is set for each such cell.
pub fn open_three_cells(board: &Board, player: Player) -> u64 {
    let mut cells = 0u64;
    for line in line_table().all() {
        let mut own = 0;
        let mut gap = None;
        for &(r, c) in line.cells() {
            match board.mark(r, c) {
                Some(p) if p == player => own += 1,
                Some(_) => {
                    gap = None;
                    own = 0;
                    break;
                }
                None => gap = Some((r, c)),
            }
        }
        if own == 3
            && let Some((r, c)) = gap
            && board.next_open_row(c) == Some(r)
        {
            cells |= 1 << (r * COLS + c);
        }
    }
    cells
}

/// Number of distinct open-three cells for `player`.
#[inline]
pub fn count_open_threes(board: &Board, player: Player) -> u32 {
    open_three_cells(board, player).count_ones()
}

/// Threat bonus for `player` minus the threat penalty for the opponent.
///
/// Two or more open threes for one side replace the linear term with the
/// much larger multi-threat weight.
pub fn evaluate_threats(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let own = count_open_threes(board, player) as i32;
    let opp = count_open_threes(board, player.opponent()) as i32;

    let bonus = if own >= 2 {
        weights.multi_threat
    } else {
        own * weights.open_three
    };
    let penalty = if opp >= 2 {
        weights.opp_multi_threat
    } else {
        opp * weights.opp_open_three
    };
    bonus - penalty
}
