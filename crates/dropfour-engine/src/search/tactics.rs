//! Tactical shortcuts checked before any tree search.
//!
//! In priority order: win now, block the opponent's win, create a double
//! threat. Trap avoidance does not pick a move by itself; it narrows the
//! root move list through [`safe_columns`].

use dropfour_core::{Board, CENTER_COLUMN, ColumnList, Player};
use tracing::debug;

use crate::eval::safety::opens_win_above;

/// Reported score for an immediate win.
pub const TACTIC_WIN: i32 = 1_000_000;
/// Reported score for a forced block.
pub const TACTIC_BLOCK: i32 = -500_000;
/// Reported score for a double threat.
pub const TACTIC_FORK: i32 = 250_000;

/// A move found without searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Win(usize),
    Block(usize),
    Fork(usize),
}

impl Tactic {
    pub fn column(self) -> usize {
        match self {
            Tactic::Win(c) | Tactic::Block(c) | Tactic::Fork(c) => c,
        }
    }

    pub fn score(self) -> i32 {
        match self {
            Tactic::Win(_) => TACTIC_WIN,
            Tactic::Block(_) => TACTIC_BLOCK,
            Tactic::Fork(_) => TACTIC_FORK,
        }
    }

    /// Plies of look-ahead the tactic represents.
    pub fn depth(self) -> u8 {
        match self {
            Tactic::Win(_) | Tactic::Block(_) => 1,
            Tactic::Fork(_) => 2,
        }
    }
}

/// Columns where `player` wins on the spot, ascending.
pub fn winning_columns(board: &Board, player: Player) -> ColumnList {
    board
        .legal_columns()
        .iter()
        .filter(|&c| board.is_winning_drop(c, player))
        .collect()
}

/// Return `true` if dropping into `column` leaves `player` with two or more
/// immediate wins in other columns, without handing the opponent a win on top.
pub fn creates_fork(board: &Board, column: usize, player: Player) -> bool {
    let Ok(landing) = board.apply(column, player) else {
        return false;
    };
    if landing.board.wins_at(landing.row, column, player) {
        return false;
    }
    if landing.board.is_winning_drop(column, player.opponent()) {
        return false;
    }
    let threats = winning_columns(&landing.board, player)
        .iter()
        .filter(|&c| c != column)
        .count();
    threats >= 2
}

/// Columns that create a double threat for `player`, ascending.
pub fn fork_columns(board: &Board, player: Player) -> ColumnList {
    board
        .legal_columns()
        .iter()
        .filter(|&c| creates_fork(board, c, player))
        .collect()
}

/// Legal columns whose drop does not let the opponent win right on top.
pub fn safe_columns(board: &Board, player: Player) -> ColumnList {
    let mut columns = board.legal_columns();
    columns.retain(|c| !opens_win_above(board, c, player));
    columns
}

/// Run the shortcut checks in priority order.
pub fn find_tactic(board: &Board, player: Player) -> Option<Tactic> {
    if let Some(c) = winning_columns(board, player).first() {
        debug!(column = c, "immediate win");
        return Some(Tactic::Win(c));
    }
    if let Some(c) = winning_columns(board, player.opponent()).first() {
        debug!(column = c, "forced block");
        return Some(Tactic::Block(c));
    }
    let fork = fork_columns(board, player)
        .iter()
        .min_by_key(|&c| (c.abs_diff(CENTER_COLUMN), c));
    if let Some(c) = fork {
        debug!(column = c, "double threat");
        return Some(Tactic::Fork(c));
    }
    None
}

#[cfg(test)]
mod tests {
    use dropfour_core::{Board, Player};

    use super::*;

    #[test]
    fn nothing_on_empty_board() {
        assert_eq!(find_tactic(&Board::empty(), Player::One), None);
        assert_eq!(safe_columns(&Board::empty(), Player::One).len(), 7);
    }

    #[test]
    fn win_beats_block() {
        // Both sides hold three on their own row; player one to move wins.
        let board: Board = "0000000/0000000/0000000/0000000/2220000/1110000".parse().unwrap();
        assert_eq!(find_tactic(&board, Player::One), Some(Tactic::Win(3)));
    }

    #[test]
    fn block_when_no_win() {
        let board: Board = "0000000/0000000/0000000/0000000/0000000/1110220".parse().unwrap();
        let tactic = find_tactic(&board, Player::Two);
        assert_eq!(tactic, Some(Tactic::Block(3)));
        assert_eq!(tactic.map(Tactic::score), Some(TACTIC_BLOCK));
    }

    #[test]
    fn open_ended_pair_becomes_fork() {
        // Bottom row 2 _ 1 1 _ _ _ with player two stacked on the left edge.
        let board: Board = "0000000/0000000/0000000/0000000/2000000/2011000".parse().unwrap();
        assert!(creates_fork(&board, 4, Player::One));
        // 2 1 1 1 _ leaves only one winning cell.
        assert!(!creates_fork(&board, 1, Player::One));
        assert_eq!(find_tactic(&board, Player::One), Some(Tactic::Fork(4)));
        assert_eq!(Tactic::Fork(4).depth(), 2);
    }

    #[test]
    fn fork_rejected_when_it_opens_a_win_above() {
        // Player one has vertical threats in columns 0 and 1. Filling (5,4)
        // would let player two complete row 4 at (4,4).
        let board: Board = "0000000/0000000/0000000/1100000/1102022/1102022".parse().unwrap();
        assert!(!creates_fork(&board, 4, Player::One));
        assert!(creates_fork(&board, 2, Player::One));
    }

    #[test]
    fn safe_columns_exclude_traps() {
        let board: Board = "0000000/0000000/0000000/0000000/2220000/1120000".parse().unwrap();
        let safe = safe_columns(&board, Player::One);
        assert!(!safe.contains(3));
        assert_eq!(safe.len(), 6);
    }
}
