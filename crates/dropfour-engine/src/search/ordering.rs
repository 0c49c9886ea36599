//! Move ordering: center preference, supported drops, and tactical bonuses.

use dropfour_core::{Board, CENTER_COLUMN, COLS, ColumnList, Player, ROWS};

use crate::config::OrderingWeights;
use crate::search::tactics::fork_columns;

/// Score a column for ordering purposes. Higher is searched first.
///
/// - center: `center * (3 - distance from center)`
/// - support: `support` for each column in `column - 1..=column + 1`
///   whose next drop rests on a piece
/// - win: the drop wins on the spot
/// - block: the opponent would win on the spot here
pub fn score_column(board: &Board, column: usize, player: Player, weights: &OrderingWeights) -> i32 {
    let distance = column.abs_diff(CENTER_COLUMN).min(3) as i32;
    let mut score = weights.center * (3 - distance);

    for nc in column.saturating_sub(1)..=(column + 1).min(COLS - 1) {
        if let Some(row) = board.next_open_row(nc)
            && row < ROWS - 1
        {
            score += weights.support;
        }
    }

    if board.is_winning_drop(column, player) {
        score += weights.win;
    }
    if board.is_winning_drop(column, player.opponent()) {
        score += weights.block;
    }
    score
}

/// Incremental column picker using selection sort.
///
/// Ties go to the column nearer the center, then to the lower index.
pub struct MovePicker {
    columns: [usize; COLS],
    scores: [i32; COLS],
    len: usize,
    cursor: usize,
}

impl MovePicker {
    /// Score every legal column of `board` for `player`.
    pub fn new(board: &Board, player: Player, weights: &OrderingWeights) -> Self {
        Self::from_columns(board, &board.legal_columns(), player, weights, None)
    }

    /// Picker for the root: `columns` restricts the candidates, and taking
    /// a square the opponent needs for a double threat earns `fork_deny`.
    pub fn new_root(
        board: &Board,
        columns: &ColumnList,
        player: Player,
        weights: &OrderingWeights,
    ) -> Self {
        let opponent_forks = fork_columns(board, player.opponent());
        Self::from_columns(board, columns, player, weights, Some(&opponent_forks))
    }

    fn from_columns(
        board: &Board,
        columns: &ColumnList,
        player: Player,
        weights: &OrderingWeights,
        opponent_forks: Option<&ColumnList>,
    ) -> Self {
        let mut picker = Self {
            columns: [0; COLS],
            scores: [0; COLS],
            len: columns.len(),
            cursor: 0,
        };
        for (i, c) in columns.iter().enumerate() {
            let mut score = score_column(board, c, player, weights);
            if opponent_forks.is_some_and(|forks| forks.contains(c)) {
                score += weights.fork_deny;
            }
            picker.columns[i] = c;
            picker.scores[i] = score;
        }
        picker
    }

    /// Yield the next best column, or `None` when exhausted.
    pub fn pick_next(&mut self) -> Option<usize> {
        if self.cursor >= self.len {
            return None;
        }

        let key = |i: usize, picker: &Self| {
            let c = picker.columns[i];
            (picker.scores[i], std::cmp::Reverse((c.abs_diff(CENTER_COLUMN), c)))
        };
        let mut best_idx = self.cursor;
        for i in (self.cursor + 1)..self.len {
            if key(i, self) > key(best_idx, self) {
                best_idx = i;
            }
        }

        self.columns.swap(self.cursor, best_idx);
        self.scores.swap(self.cursor, best_idx);

        let column = self.columns[self.cursor];
        self.cursor += 1;
        Some(column)
    }
}

impl Iterator for MovePicker {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.pick_next()
    }
}

/// Legal columns of `board` for `player`, best first.
pub fn ordered_moves(board: &Board, player: Player, weights: &OrderingWeights) -> ColumnList {
    MovePicker::new(board, player, weights).collect()
}
