//! Compact text form for [`Board`]: six rows, top first, separated by `/`.
//!
//! Each row holds seven characters: `0` or `.` for an empty cell, `1` or `2`
//! for a player's piece. The empty board is
//! `0000000/0000000/0000000/0000000/0000000/0000000`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::BoardError;
use crate::player::Player;
use crate::{COLS, ROWS};

/// Compact text of the empty board.
pub const EMPTY_BOARD_TEXT: &str = "0000000/0000000/0000000/0000000/0000000/0000000";

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut grid = [[0u8; COLS]; ROWS];
        for (r, row) in rows.iter().enumerate() {
            let count = row.chars().count();
            if count != COLS {
                return Err(BoardError::WrongRowLength { row: r, found: count });
            }
            for (c, ch) in row.chars().enumerate() {
                grid[r][c] = match ch {
                    '0' | '.' => 0,
                    '1' => 1,
                    '2' => 2,
                    _ => return Err(BoardError::InvalidChar { character: ch }),
                };
            }
        }

        Board::from_rows(&grid)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..COLS {
                let c = match self.mark(row, col) {
                    Some(Player::One) => '1',
                    Some(Player::Two) => '2',
                    None => '0',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_BOARD_TEXT;
    use crate::board::Board;
    use crate::error::BoardError;
    use crate::player::Player;

    #[test]
    fn empty_text_parses_to_empty_board() {
        let board: Board = EMPTY_BOARD_TEXT.parse().unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn display_matches_parse() {
        let board = Board::from_moves(&[3, 3, 2, 4]).unwrap();
        let text = board.to_string();
        assert_eq!(text, "0000000/0000000/0000000/0000000/0002000/0011200");
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn dots_are_empty() {
        let board: Board = "......./......./......./......./......./...1...".parse().unwrap();
        assert_eq!(board.mark(5, 3), Some(Player::One));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn wrong_row_count() {
        assert_eq!(
            "0000000/0000000".parse::<Board>(),
            Err(BoardError::WrongRowCount { found: 2 })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            "0000000/0000000/0000000/0000000/0000000/000x000".parse::<Board>(),
            Err(BoardError::InvalidChar { character: 'x' })
        );
    }

    #[test]
    fn floating_piece_rejected() {
        assert_eq!(
            "0000000/0000000/0000000/0001000/0000000/0000000".parse::<Board>(),
            Err(BoardError::FloatingPiece { row: 3, col: 3 })
        );
    }
}
