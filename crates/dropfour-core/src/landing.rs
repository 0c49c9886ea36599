//! Move application via copy-make.

use crate::board::Board;
use crate::error::BoardError;
use crate::player::Player;
use crate::COLS;

/// Outcome of a successful drop: the new position and where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    /// Position after the drop.
    pub board: Board,
    /// Row the piece landed on (0 = top).
    pub row: usize,
    /// Column the piece was dropped into.
    pub column: usize,
}

impl Board {
    /// Drop `player`'s piece into `column` and return the resulting board.
    /// Copy-make: `self` is not modified.
    ///
    /// # Errors
    ///
    /// [`BoardError::ColumnOutOfRange`] for a column outside `0..7`,
    /// [`BoardError::ColumnFull`] when the column has no empty cell.
    pub fn apply(&self, column: usize, player: Player) -> Result<Landing, BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange { column });
        }
        let row = self
            .next_open_row(column)
            .ok_or(BoardError::ColumnFull { column })?;

        let mut board = *self;
        board.place(row, column, player);
        Ok(Landing { board, row, column })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::BoardError;
    use crate::player::Player;

    #[test]
    fn drop_lands_on_bottom_row() {
        let board = Board::empty();
        let landing = board.apply(3, Player::One).unwrap();
        assert_eq!(landing.row, 5);
        assert_eq!(landing.column, 3);
        assert_eq!(landing.board.mark(5, 3), Some(Player::One));
        assert_eq!(landing.board.piece_count(), 1);
    }

    #[test]
    fn drop_stacks() {
        let board = Board::from_moves(&[2, 2]).unwrap();
        let landing = board.apply(2, Player::One).unwrap();
        assert_eq!(landing.row, 3);
    }

    #[test]
    fn drop_leaves_source_board_untouched() {
        let board = Board::from_moves(&[0, 1]).unwrap();
        let before = board;
        let _ = board.apply(4, Player::One).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn full_column_fails_without_mutation() {
        let board = Board::from_moves(&[6, 6, 6, 6, 6, 6]).unwrap();
        let before = board;
        assert_eq!(
            board.apply(6, Player::One),
            Err(BoardError::ColumnFull { column: 6 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_column() {
        assert_eq!(
            Board::empty().apply(7, Player::Two),
            Err(BoardError::ColumnOutOfRange { column: 7 })
        );
    }

    #[test]
    fn fourth_mark_in_open_line_wins() {
        // Three of player one along the bottom row, fourth drop completes it.
        let board = Board::from_moves(&[1, 1, 2, 2, 3, 3]).unwrap();
        assert_eq!(board.winner(), None);
        let landing = board.apply(4, Player::One).unwrap();
        assert_eq!(landing.board.winner(), Some(Player::One));
        assert!(landing.board.wins_at(landing.row, 4, Player::One));
    }
}
