//! Move selection: tactical shortcuts, then iterative-deepening minimax.

pub mod control;
pub mod minimax;
pub mod ordering;
pub mod tactics;

use std::fmt;
use std::time::Duration;

use dropfour_core::{Board, CENTER_COLUMN, ColumnList, Player};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::depth::target_depth;
use crate::eval::threats::count_open_threes;
use crate::time::{SearchLimits, control_from_limits};
use minimax::{SearchContext, WIN_THRESHOLD, search_root};
use tactics::{Tactic, find_tactic, safe_columns};

/// How a [`MoveResult`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    ImmediateWin,
    Block,
    Fork,
    /// Iterative-deepening search.
    Search,
    /// Center-most legal column, used when nothing better is available.
    Fallback,
    NoMoves,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decision::ImmediateWin => "win",
            Decision::Block => "block",
            Decision::Fork => "fork",
            Decision::Search => "search",
            Decision::Fallback => "fallback",
            Decision::NoMoves => "none",
        };
        f.write_str(name)
    }
}

impl From<Tactic> for Decision {
    fn from(tactic: Tactic) -> Self {
        match tactic {
            Tactic::Win(_) => Decision::ImmediateWin,
            Tactic::Block(_) => Decision::Block,
            Tactic::Fork(_) => Decision::Fork,
        }
    }
}

/// Result of one move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen column, `None` when no column is playable.
    pub column: Option<usize>,
    /// Score from the mover's point of view.
    pub score: i32,
    /// Deepest completed iteration (or the tactic's nominal depth).
    pub depth: u8,
    pub elapsed: Duration,
    pub nodes: u64,
    pub decision: Decision,
}

/// Iterative-deepening move searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: EngineConfig,
}

impl Searcher {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Pick a column for `player` without progress reporting.
    ///
    /// `legal_hint` is the caller's view of the legal columns. It is only
    /// cross-checked against the board: the board's own legal set always
    /// decides, and it is empty only on a full board, where no hinted column
    /// could be played either.
    pub fn best_move(
        &self,
        board: &Board,
        player: Player,
        legal_hint: &[usize],
        limits: &SearchLimits,
    ) -> MoveResult {
        self.search(board, player, legal_hint, limits, |_, _, _, _| {})
    }

    /// Pick a column for `player`.
    ///
    /// Calls `on_iter(depth, score, nodes, column)` after each completed
    /// iteration.
    pub fn search<F>(
        &self,
        board: &Board,
        player: Player,
        legal_hint: &[usize],
        limits: &SearchLimits,
        mut on_iter: F,
    ) -> MoveResult
    where
        F: FnMut(u8, i32, u64, Option<usize>),
    {
        let control = control_from_limits(limits, self.config.hard_limit_factor);

        let legal = board.legal_columns();
        let disagrees =
            legal_hint.len() != legal.len() || legal_hint.iter().any(|&c| !legal.contains(c));
        if !legal_hint.is_empty() && disagrees {
            debug!(hint = ?legal_hint, legal = ?legal, "caller legal columns disagree with board");
        }

        let Some(center) = center_most(&legal) else {
            info!("no legal moves");
            return MoveResult {
                column: None,
                score: 0,
                depth: 0,
                elapsed: control.elapsed(),
                nodes: 0,
                decision: Decision::NoMoves,
            };
        };

        if let Some(winner) = board.winner() {
            warn!(%winner, column = center, "position already decided, playing center-most column");
            return MoveResult {
                column: Some(center),
                score: 0,
                depth: 0,
                elapsed: control.elapsed(),
                nodes: 0,
                decision: Decision::Fallback,
            };
        }

        if let Some(tactic) = find_tactic(board, player) {
            let decision = Decision::from(tactic);
            info!(column = tactic.column(), %decision, "tactical move");
            return MoveResult {
                column: Some(tactic.column()),
                score: tactic.score(),
                depth: tactic.depth(),
                elapsed: control.elapsed(),
                nodes: 0,
                decision,
            };
        }

        let threat_signal = count_open_threes(board, player) > 0
            || count_open_threes(board, player.opponent()) > 0;
        let cap = u8::try_from(board.empty_cells()).unwrap_or(u8::MAX).max(1);
        let max_depth = limits
            .depth
            .unwrap_or_else(|| {
                target_depth(
                    board.piece_count(),
                    threat_signal,
                    legal.len(),
                    board.empty_cells(),
                    &self.config.depth,
                )
            })
            .clamp(1, cap);

        let mut root_moves = safe_columns(board, player);
        root_moves.retain(|c| legal.contains(c));
        if root_moves.is_empty() {
            root_moves = legal;
        }
        debug!(max_depth, threat_signal, root_moves = ?root_moves, "starting search");

        let mut ctx = SearchContext::new(&control, &self.config);
        let mut completed: Option<(usize, i32, u8)> = None;

        for depth in 1..=max_depth {
            if depth > 1 && control.should_stop_iterating() {
                break;
            }

            let (score, column) = search_root(board, depth, player, &root_moves, &mut ctx);

            // A partially searched iteration is discarded.
            if ctx.aborted {
                debug!(depth, nodes = ctx.nodes, "iteration aborted");
                break;
            }
            let Some(column) = column else {
                break;
            };

            completed = Some((column, score, depth));
            debug!(depth, score, nodes = ctx.nodes, column, "iteration complete");
            on_iter(depth, score, ctx.nodes, Some(column));

            if score.abs() >= WIN_THRESHOLD {
                break;
            }
        }

        let (column, score, depth, decision) = match completed {
            Some((column, score, depth)) if legal.contains(column) => {
                (column, score, depth, Decision::Search)
            }
            other => {
                warn!(searched = ?other.map(|(c, _, _)| c), column = center, "search gave no legal column, using center-most");
                (
                    center,
                    other.map_or(0, |(_, s, _)| s),
                    other.map_or(0, |(_, _, d)| d),
                    Decision::Fallback,
                )
            }
        };

        let elapsed = control.elapsed();
        info!(
            column,
            score,
            depth,
            nodes = ctx.nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            %decision,
            "move chosen"
        );

        MoveResult {
            column: Some(column),
            score,
            depth,
            elapsed,
            nodes: ctx.nodes,
            decision,
        }
    }
}

fn center_most(columns: &ColumnList) -> Option<usize> {
    columns
        .iter()
        .min_by_key(|&c| (c.abs_diff(CENTER_COLUMN), c))
}
