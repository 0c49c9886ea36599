//! Engine configuration: every tunable weight, threshold, and budget in one place.
//!
//! Evaluator variants are expressed as different [`EvalWeights`] values rather
//! than different code paths.

use std::time::Duration;

use dropfour_core::{COLS, ROWS};

/// Window, threat, connectivity, and safety weights for the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    /// Four of a kind inside a window.
    pub win: i32,
    /// Three own marks plus one empty cell.
    pub three: i32,
    /// Two own marks plus two empty cells.
    pub two: i32,
    /// Opponent three plus one empty cell (subtracted).
    pub opp_three: i32,
    /// Opponent two plus two empty cells (subtracted).
    pub opp_two: i32,
    /// Per-cell positional values, `[row][col]`, row 0 on top.
    pub position: [[i32; COLS]; ROWS],
    /// Each own open three when there is only one.
    pub open_three: i32,
    /// Each opponent open three when there is only one (subtracted).
    pub opp_open_three: i32,
    /// Two or more own open threes at once.
    pub multi_threat: i32,
    /// Two or more opponent open threes at once (subtracted).
    pub opp_multi_threat: i32,
    /// Adjacent same-owner pair along a row or column.
    pub pair: i32,
    /// Extra for a run of three along a row or column.
    pub triple: i32,
    /// Per playable column whose drop lets the opponent win right on top.
    pub trap_penalty: i32,
    /// Percent multipliers per game stage.
    pub stages: [StageWeights; 3],
}

/// Percent multipliers for each evaluator term group in one game stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageWeights {
    pub windows: i32,
    pub positional: i32,
    pub threats: i32,
    pub connectivity: i32,
    pub safety: i32,
}

/// Center-weighted cell values: a center cell sits on the most lines.
#[rustfmt::skip]
pub const POSITION_VALUES: [[i32; COLS]; ROWS] = [
    [3, 4,  5,  7,  5, 4, 3],
    [4, 6,  8, 10,  8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6,  8, 10,  8, 6, 4],
    [3, 4,  5,  7,  5, 4, 3],
];

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win: 1_000_000,
            three: 100,
            two: 10,
            opp_three: 120,
            opp_two: 12,
            position: POSITION_VALUES,
            open_three: 150,
            opp_open_three: 200,
            multi_threat: 50_000,
            opp_multi_threat: 60_000,
            pair: 5,
            triple: 15,
            trap_penalty: 500,
            stages: [
                // Opening
                StageWeights { windows: 100, positional: 150, threats: 100, connectivity: 100, safety: 100 },
                // Midgame
                StageWeights { windows: 100, positional: 100, threats: 130, connectivity: 100, safety: 100 },
                // Endgame
                StageWeights { windows: 100, positional: 80, threats: 150, connectivity: 70, safety: 150 },
            ],
        }
    }
}

/// Move-ordering bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingWeights {
    /// Multiplied by `3 - distance from center`.
    pub center: i32,
    /// Per neighbouring column whose next drop rests on a piece.
    pub support: i32,
    /// Column wins on the spot.
    pub win: i32,
    /// Column blocks an opponent win.
    pub block: i32,
    /// Column takes the square the opponent needs for a double threat.
    pub fork_deny: i32,
}

impl Default for OrderingWeights {
    fn default() -> Self {
        Self {
            center: 3,
            support: 2,
            win: 1_000,
            block: 900,
            fork_deny: 400,
        }
    }
}

/// Piece-count steps and bonuses that pick the search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthPolicy {
    /// `(pieces below, depth)` steps in ascending piece order.
    pub steps: [(usize, u8); 3],
    /// Depth once every step is passed.
    pub endgame_depth: u8,
    /// Added when either side holds an open three.
    pub threat_bonus: u8,
    /// Added when at most `narrow_columns` columns are playable.
    pub narrow_bonus: u8,
    pub narrow_columns: usize,
}

impl Default for DepthPolicy {
    fn default() -> Self {
        Self {
            steps: [(10, 5), (25, 6), (35, 7)],
            endgame_depth: 9,
            threat_bonus: 1,
            narrow_bonus: 1,
            narrow_columns: 4,
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub weights: EvalWeights,
    pub ordering: OrderingWeights,
    pub depth: DepthPolicy,
    /// Soft wall-clock budget: no new iteration starts after this.
    pub time_budget: Duration,
    /// Hard limit as a multiple of the soft budget; aborts an iteration mid-flight.
    pub hard_limit_factor: u32,
    /// Extra plies granted along one line when a move leaves a direct threat at the horizon.
    pub max_extensions: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            ordering: OrderingWeights::default(),
            depth: DepthPolicy::default(),
            time_budget: Duration::from_millis(1_500),
            hard_limit_factor: 2,
            max_extensions: 2,
        }
    }
}
