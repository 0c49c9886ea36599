//! Adjacent same-owner runs along rows and columns.

use dropfour_core::{Board, COLS, Player, ROWS};

use crate::config::EvalWeights;

/// Pair and triple bonuses for `player` minus the same for the opponent.
///
/// Every adjacent pair scores `pair`; every run of three additionally
/// scores `triple`. Diagonals are left to the window term.
pub fn evaluate_connectivity(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    let mut credit = |owner: Player, value: i32| {
        if owner == player {
            score += value;
        } else {
            score -= value;
        }
    };

    for r in 0..ROWS {
        for c in 0..COLS {
            let Some(owner) = board.mark(r, c) else {
                continue;
            };
            let same = |rr: usize, cc: usize| board.mark(rr, cc) == Some(owner);

            if c + 1 < COLS && same(r, c + 1) {
                credit(owner, weights.pair);
                if c + 2 < COLS && same(r, c + 2) {
                    credit(owner, weights.triple);
                }
            }
            if r + 1 < ROWS && same(r + 1, c) {
                credit(owner, weights.pair);
                if r + 2 < ROWS && same(r + 2, c) {
                    credit(owner, weights.triple);
                }
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use dropfour_core::{Board, Player};

    use super::evaluate_connectivity;
    use crate::config::EvalWeights;

    #[test]
    fn horizontal_triple() {
        let w = EvalWeights::default();
        let board: Board = "0000000/0000000/0000000/0000000/0000000/0111000".parse().unwrap();
        // Two pairs and one triple.
        assert_eq!(evaluate_connectivity(&board, Player::One, &w), 2 * w.pair + w.triple);
        assert_eq!(evaluate_connectivity(&board, Player::Two, &w), -(2 * w.pair + w.triple));
    }

    #[test]
    fn vertical_pair_against_horizontal_pair() {
        let w = EvalWeights::default();
        let board: Board = "0000000/0000000/0000000/0000000/1000000/1000220".parse().unwrap();
        assert_eq!(evaluate_connectivity(&board, Player::One, &w), 0);
    }

    #[test]
    fn diagonals_ignored() {
        let w = EvalWeights::default();
        let board: Board = "0000000/0000000/0000000/0000000/0010000/0120000".parse().unwrap();
        assert_eq!(evaluate_connectivity(&board, Player::One, &w), 0);
    }
}
