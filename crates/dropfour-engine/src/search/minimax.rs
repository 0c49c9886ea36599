//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from the point of view of the searching `player`:
//! maximizing nodes are that player's turns, minimizing nodes the
//! opponent's. The evaluator is not antisymmetric, so this cannot be
//! folded into negamax.

use dropfour_core::{Board, ColumnList, Player};

use crate::config::EngineConfig;
use crate::eval::evaluate;
use crate::search::control::SearchControl;
use crate::search::ordering::MovePicker;

/// Score representing an unreachable bound.
pub const INF: i32 = 20_000_000;

/// Base score for a won position (reduced by ply so faster wins score higher).
pub const WIN_SCORE: i32 = 10_000_000;

/// Scores beyond this magnitude mean a forced result was found.
pub const WIN_THRESHOLD: i32 = WIN_SCORE - 100;

/// Per-search mutable state.
pub struct SearchContext<'a> {
    pub nodes: u64,
    pub control: &'a SearchControl,
    pub config: &'a EngineConfig,
    /// Set once the hard limit fires; every score after that is garbage.
    pub aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(control: &'a SearchControl, config: &'a EngineConfig) -> Self {
        Self {
            nodes: 0,
            control,
            config,
            aborted: false,
        }
    }
}

/// Search `board` to `depth` plies and return the score for `player` plus
/// the best column at this node (`None` at terminal and leaf nodes).
///
/// `maximizing` says whether `player` is the one to move.
pub fn minimax(
    board: &Board,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    player: Player,
    ctx: &mut SearchContext<'_>,
) -> (i32, Option<usize>) {
    let extensions = ctx.config.max_extensions;
    node(board, depth, 0, alpha, beta, maximizing, player, board.winner(), extensions, None, ctx)
}

/// Root search for `player` restricted to `root_moves`, full window.
pub(super) fn search_root(
    board: &Board,
    depth: u8,
    player: Player,
    root_moves: &ColumnList,
    ctx: &mut SearchContext<'_>,
) -> (i32, Option<usize>) {
    let extensions = ctx.config.max_extensions;
    node(board, depth, 0, -INF, INF, true, player, None, extensions, Some(root_moves), ctx)
}

#[allow(clippy::too_many_arguments)]
fn node(
    board: &Board,
    depth: u8,
    ply: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Player,
    winner: Option<Player>,
    extensions: u8,
    root_moves: Option<&ColumnList>,
    ctx: &mut SearchContext<'_>,
) -> (i32, Option<usize>) {
    ctx.nodes += 1;

    if ctx.control.should_stop(ctx.nodes) {
        ctx.aborted = true;
        return (0, None);
    }

    if let Some(w) = winner {
        let score = WIN_SCORE - ply as i32;
        return (if w == player { score } else { -score }, None);
    }
    if board.is_full() {
        return (0, None);
    }
    if depth == 0 {
        return (evaluate(board, player, &ctx.config.weights), None);
    }

    let mover = if maximizing { player } else { player.opponent() };
    let ordering = &ctx.config.ordering;
    let picker = match root_moves {
        Some(columns) => MovePicker::new_root(board, columns, mover, ordering),
        None => MovePicker::new(board, mover, ordering),
    };

    let mut best_score = if maximizing { -INF } else { INF };
    let mut best_column = None;

    for column in picker {
        let Ok(landing) = board.apply(column, mover) else {
            continue;
        };
        let child_winner = landing.board.wins_at(landing.row, column, mover).then_some(mover);

        // Threat extension at the horizon: look one ply past a drop that
        // leaves the mover a winning follow-up.
        let (child_depth, child_extensions) = if depth == 1
            && extensions > 0
            && child_winner.is_none()
            && has_winning_drop(&landing.board, mover)
        {
            (1, extensions - 1)
        } else {
            (depth - 1, extensions)
        };

        let (score, _) = node(
            &landing.board,
            child_depth,
            ply + 1,
            alpha,
            beta,
            !maximizing,
            player,
            child_winner,
            child_extensions,
            None,
            ctx,
        );
        if ctx.aborted {
            return (0, None);
        }

        if maximizing {
            if score > best_score {
                best_score = score;
                best_column = Some(column);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_column = Some(column);
            }
            beta = beta.min(score);
        }

        if alpha >= beta {
            break;
        }
    }

    (best_score, best_column)
}

fn has_winning_drop(board: &Board, player: Player) -> bool {
    board
        .legal_columns()
        .iter()
        .any(|c| board.is_winning_drop(c, player))
}
