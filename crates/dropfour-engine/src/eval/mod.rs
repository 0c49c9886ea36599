//! Static evaluation of a position from one player's point of view.
//!
//! The score is the sum of independent term groups, each scaled by the
//! percent multiplier of the current game [`Stage`](stage::Stage):
//!
//! | Group | Module |
//! |---|---|
//! | Line windows | [`windows`] |
//! | Cell positions | [`positional`] |
//! | Open threes | [`threats`] |
//! | Adjacent runs | [`connectivity`] |
//! | One-ply traps | [`safety`] |

pub mod connectivity;
pub mod positional;
pub mod safety;
pub mod stage;
pub mod threats;
pub mod windows;

use dropfour_core::{Board, Player};

use crate::config::EvalWeights;
use stage::Stage;

/// Evaluate `board` for `player`. Larger is better for `player`.
///
/// Not antisymmetric: opponent patterns carry heavier weights than the
/// matching own patterns, so `evaluate(b, p) != -evaluate(b, !p)` in general.
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let stage = weights.stages[Stage::from_piece_count(board.piece_count()).index()];

    let windows = windows::evaluate_windows(board, player, weights);
    let positional = positional::evaluate_positional(board, player, weights);
    let threats = threats::evaluate_threats(board, player, weights);
    let connectivity = connectivity::evaluate_connectivity(board, player, weights);
    let safety = safety::evaluate_safety(board, player, weights);

    (windows * stage.windows
        + positional * stage.positional
        + threats * stage.threats
        + connectivity * stage.connectivity
        + safety * stage.safety)
        / 100
}

#[cfg(test)]
mod tests {
    use dropfour_core::{Board, Player};

    use super::evaluate;
    use super::stage::Stage;
    use crate::config::{EvalWeights, StageWeights};

    #[test]
    fn empty_board_is_zero() {
        let w = EvalWeights::default();
        assert_eq!(evaluate(&Board::empty(), Player::One, &w), 0);
        assert_eq!(evaluate(&Board::empty(), Player::Two, &w), 0);
    }

    #[test]
    fn center_drop_beats_edge_drop() {
        let w = EvalWeights::default();
        let center = Board::from_moves(&[3]).unwrap();
        let edge = Board::from_moves(&[0]).unwrap();
        assert!(evaluate(&center, Player::One, &w) > evaluate(&edge, Player::One, &w));
    }

    #[test]
    fn extra_own_piece_raises_score() {
        let w = EvalWeights::default();
        // Player one adds a piece; the opponent's pieces stay put.
        let before: Board = "0000000/0000000/0000000/0000000/0000000/0012200".parse().unwrap();
        let after: Board = "0000000/0000000/0000000/0000000/0000000/0112200".parse().unwrap();
        assert!(evaluate(&after, Player::One, &w) > evaluate(&before, Player::One, &w));
    }

    #[test]
    fn defense_weighted_above_attack() {
        let w = EvalWeights::default();
        let board: Board = "0000000/0000000/0000000/0000000/0000000/0011000".parse().unwrap();
        let own = evaluate(&board, Player::One, &w);
        let other = evaluate(&board, Player::Two, &w);
        assert!(own > 0);
        assert!(-other > own);
    }

    #[test]
    fn double_threat_dominates() {
        let w = EvalWeights::default();
        // Player two holds open threes at columns 0 and 4 on the bottom row.
        let fork: Board = "0000000/0000000/0000000/0000000/0011100/0022200".parse().unwrap();
        let score = evaluate(&fork, Player::One, &w);
        assert!(score <= -w.opp_multi_threat, "score {score} should reflect a lost position");
        assert!(evaluate(&fork, Player::Two, &w) >= w.multi_threat);
    }

    #[test]
    fn stage_percents_scale_each_group() {
        let w = EvalWeights::default();
        let board: Board = "0000000/0000000/0000000/0000000/0001000/0021200".parse().unwrap();
        let p = Player::One;
        let terms = [
            super::windows::evaluate_windows(&board, p, &w),
            super::positional::evaluate_positional(&board, p, &w),
            super::threats::evaluate_threats(&board, p, &w),
            super::connectivity::evaluate_connectivity(&board, p, &w),
            super::safety::evaluate_safety(&board, p, &w),
        ];
        let scaled = |s: StageWeights| {
            let pct = [s.windows, s.positional, s.threats, s.connectivity, s.safety];
            terms.iter().zip(pct).map(|(t, pct)| t * pct).sum::<i32>() / 100
        };

        let [opening, _, endgame] = w.stages;
        assert_eq!(Stage::from_piece_count(board.piece_count()), Stage::Opening);
        assert_eq!(evaluate(&board, p, &w), scaled(opening));

        // The same pieces scored with endgame percents in the opening slot.
        let late = EvalWeights { stages: [endgame, w.stages[1], endgame], ..w.clone() };
        assert_eq!(evaluate(&board, p, &late), scaled(endgame));
        assert_ne!(scaled(opening), scaled(endgame));
    }
}
