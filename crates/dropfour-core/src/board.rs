//! The game board: cell marks, column heights, and game-end detection.

use std::fmt;

use crate::columns::ColumnList;
use crate::error::BoardError;
use crate::lines::line_table;
use crate::player::Player;
use crate::{CENTER_COLUMN, COLS, ROWS};

/// Complete position state.
///
/// A small `Copy` value: the search copies a board per node instead of
/// undoing moves. Row 0 is the top row; pieces fill each column from row 5 up.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cell marks indexed `[row][col]`.
    cells: [[Option<Player>; COLS]; ROWS],
    /// Pieces in each column, cached so the next drop row is O(1).
    heights: [u8; COLS],
    /// Total pieces on the board.
    count: u8,
}

impl Board {
    /// Return the empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [[None; COLS]; ROWS],
            heights: [0; COLS],
            count: 0,
        }
    }

    /// Build a board from raw marks (`0` empty, `1`/`2` players), top row first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidMark`] for values other than 0, 1, 2 and
    /// [`BoardError::FloatingPiece`] when a piece sits above an empty cell.
    pub fn from_rows(rows: &[[u8; COLS]; ROWS]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.cells[r][c] = match value {
                    0 => None,
                    v => Some(Player::from_id(v as i64).ok_or(BoardError::InvalidMark {
                        row: r,
                        col: c,
                        value: v as i64,
                    })?),
                };
            }
        }
        board.recount()?;
        Ok(board)
    }

    /// Build a board from a host-supplied grid of arbitrary shape.
    ///
    /// # Errors
    ///
    /// Rejects grids that are not 6x7, hold values outside `{0, 1, 2}`,
    /// or violate gravity.
    pub fn try_from_grid<T: AsRef<[i64]>>(grid: &[T]) -> Result<Board, BoardError> {
        if grid.len() != ROWS {
            return Err(BoardError::WrongRowCount { found: grid.len() });
        }
        let mut rows = [[0u8; COLS]; ROWS];
        for (r, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != COLS {
                return Err(BoardError::WrongRowLength {
                    row: r,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                rows[r][c] = match value {
                    0..=2 => value as u8,
                    _ => return Err(BoardError::InvalidMark { row: r, col: c, value }),
                };
            }
        }
        Board::from_rows(&rows)
    }

    /// Play a sequence of columns from the empty board, alternating from [`Player::One`].
    ///
    /// # Errors
    ///
    /// Fails on the first column that is out of range or full.
    pub fn from_moves(columns: &[usize]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut player = Player::One;
        for &column in columns {
            board = board.apply(column, player)?.board;
            player = player.opponent();
        }
        Ok(board)
    }

    /// Recompute heights and piece count, checking the gravity invariant.
    fn recount(&mut self) -> Result<(), BoardError> {
        self.count = 0;
        for c in 0..COLS {
            let mut height = 0u8;
            let mut seen_empty = false;
            for r in (0..ROWS).rev() {
                match self.cells[r][c] {
                    Some(_) if seen_empty => {
                        return Err(BoardError::FloatingPiece { row: r, col: c });
                    }
                    Some(_) => height += 1,
                    None => seen_empty = true,
                }
            }
            self.heights[c] = height;
            self.count += height;
        }
        Ok(())
    }

    /// Return the mark at `(row, col)`.
    #[inline]
    pub fn mark(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Return the number of pieces in `column`.
    #[inline]
    pub fn height(&self, column: usize) -> usize {
        self.heights[column] as usize
    }

    /// Return the row the next piece in `column` would land on, or `None` if full.
    #[inline]
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        let height = self.heights[column] as usize;
        (height < ROWS).then(|| ROWS - 1 - height)
    }

    /// Return `true` if a piece can be dropped into `column`.
    #[inline]
    pub fn is_playable(&self, column: usize) -> bool {
        column < COLS && (self.heights[column] as usize) < ROWS
    }

    /// Return the total number of pieces on the board.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.count as usize
    }

    /// Return the number of empty cells.
    #[inline]
    pub fn empty_cells(&self) -> usize {
        ROWS * COLS - self.count as usize
    }

    /// Return the playable columns in ascending order.
    pub fn legal_columns(&self) -> ColumnList {
        (0..COLS).filter(|&c| self.is_playable(c)).collect()
    }

    /// Return the playable column closest to the center, preferring the left on ties.
    pub fn center_most_column(&self) -> Option<usize> {
        (0..COLS)
            .filter(|&c| self.is_playable(c))
            .min_by_key(|&c| (c.abs_diff(CENTER_COLUMN), c))
    }

    /// Return `true` if every column is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize == ROWS)
    }

    /// Scan every line and return the owner of the first complete one.
    pub fn winner(&self) -> Option<Player> {
        line_table().all().iter().find_map(|line| {
            let [a, b, c, d] = *line.cells();
            let owner = self.cells[a.0][a.1]?;
            [b, c, d]
                .iter()
                .all(|&(r, col)| self.cells[r][col] == Some(owner))
                .then_some(owner)
        })
    }

    /// Return `true` if the game is over (a winner exists or the board is full).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Return `true` if `player` owns a complete line through `(row, col)`.
    ///
    /// Only the lines through that cell are inspected, so this is the cheap
    /// check to run right after a drop.
    pub fn wins_at(&self, row: usize, col: usize, player: Player) -> bool {
        line_table().through(row, col).any(|line| {
            line.cells()
                .iter()
                .all(|&(r, c)| self.cells[r][c] == Some(player))
        })
    }

    /// Return `true` if dropping `player`'s piece into `column` wins on the spot.
    pub fn is_winning_drop(&self, column: usize, player: Player) -> bool {
        match self.apply(column, player) {
            Ok(landing) => landing.board.wins_at(landing.row, column, player),
            Err(_) => false,
        }
    }

    /// Place `player` at `(row, col)` without checking gravity. Used by drops.
    #[inline]
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Some(player);
        self.heights[col] += 1;
        self.count += 1;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 6x7 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..ROWS {
            write!(f, "|")?;
            for col in 0..COLS {
                let c = match board.mark(row, col) {
                    Some(Player::One) => 'X',
                    Some(Player::Two) => 'O',
                    None => '.',
                };
                write!(f, "{c}|")?;
            }
            writeln!(f)?;
        }
        write!(f, " 0 1 2 3 4 5 6")
    }
}
