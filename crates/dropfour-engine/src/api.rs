//! Host-facing move request: raw integer grid in, column and diagnostics out.

use dropfour_core::{Board, COLS, Player};
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::Searcher;
use crate::time::SearchLimits;

/// Answer to a [`compute_move`] request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMove {
    /// Chosen column, or `-1` when no column is playable.
    pub column: i32,
    pub score: i32,
    pub depth: u8,
    pub elapsed_seconds: f64,
}

/// Choose a column for `player` on `grid` under the configured time budget.
///
/// `grid[0]` is the top row; cells hold 0 (empty), 1, or 2. Legal columns
/// are recomputed from the grid; `legal` is a fallback only, and entries
/// outside `0..7` are ignored.
///
/// # Errors
///
/// [`EngineError::InvalidPlayer`] for a player id other than 1 or 2, and
/// [`EngineError::InvalidBoard`] for a grid of the wrong shape, with unknown
/// marks, or with floating pieces.
pub fn compute_move<T: AsRef<[i64]>>(
    grid: &[T],
    player: i64,
    legal: &[i64],
    config: &EngineConfig,
) -> Result<ComputedMove, EngineError> {
    compute_move_with_limits(grid, player, legal, config, &SearchLimits::from_config(config))
}

/// [`compute_move`] with explicit search limits.
pub fn compute_move_with_limits<T: AsRef<[i64]>>(
    grid: &[T],
    player: i64,
    legal: &[i64],
    config: &EngineConfig,
    limits: &SearchLimits,
) -> Result<ComputedMove, EngineError> {
    let player = Player::from_id(player).ok_or(EngineError::InvalidPlayer { value: player })?;
    let board = Board::try_from_grid(grid)?;
    let hint: Vec<usize> = legal
        .iter()
        .filter_map(|&c| usize::try_from(c).ok())
        .filter(|&c| c < COLS)
        .collect();
    debug!(%board, %player, ?hint, "move request");

    let result = Searcher::new(config.clone()).best_move(&board, player, &hint, limits);

    Ok(ComputedMove {
        column: result.column.map_or(-1, |c| c as i32),
        score: result.score,
        depth: result.depth,
        elapsed_seconds: result.elapsed.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use dropfour_core::BoardError;

    use super::*;

    fn empty_grid() -> Vec<Vec<i64>> {
        vec![vec![0; 7]; 6]
    }

    #[test]
    fn rejects_bad_player() {
        let err = compute_move(&empty_grid(), 3, &[], &EngineConfig::default()).unwrap_err();
        assert_eq!(err, EngineError::InvalidPlayer { value: 3 });
    }

    #[test]
    fn rejects_bad_shape() {
        let grid = vec![vec![0i64; 7]; 5];
        let err = compute_move(&grid, 1, &[], &EngineConfig::default()).unwrap_err();
        assert_eq!(err, EngineError::InvalidBoard(BoardError::WrongRowCount { found: 5 }));
    }

    #[test]
    fn rejects_unknown_mark() {
        let mut grid = empty_grid();
        grid[5][2] = 7;
        let err = compute_move(&grid, 1, &[], &EngineConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidBoard(BoardError::InvalidMark { row: 5, col: 2, value: 7 })
        );
    }

    #[test]
    fn full_grid_returns_minus_one() {
        let rows = ["1122112", "2211221", "1122112", "2211221", "1122112", "2211221"];
        let grid: Vec<Vec<i64>> = rows
            .iter()
            .map(|r| r.bytes().map(|b| i64::from(b - b'0')).collect())
            .collect();
        let answer = compute_move(&grid, 2, &[0, 1, -4, 99], &EngineConfig::default()).unwrap();
        assert_eq!(answer.column, -1);
        assert_eq!(answer.depth, 0);
    }

    #[test]
    fn empty_grid_fixed_depth_plays_center() {
        let answer = compute_move_with_limits(
            &empty_grid(),
            1,
            &[0, 1, 2, 3, 4, 5, 6],
            &EngineConfig::default(),
            &SearchLimits::depth_only(3),
        )
        .unwrap();
        assert_eq!(answer.column, 3);
        assert!(answer.elapsed_seconds >= 0.0);
    }
}
