//! Core types for the 6x7 gravity-drop game: board representation, drops, and game rules.

mod board;
mod columns;
mod error;
mod landing;
mod lines;
mod player;
mod text;

pub use board::{Board, PrettyBoard};
pub use columns::ColumnList;
pub use error::BoardError;
pub use landing::Landing;
pub use lines::{Axis, LINE_COUNT, Line, LineTable, line_table};
pub use player::Player;
pub use text::EMPTY_BOARD_TEXT;

/// Number of rows on the board. Row 0 is the top row.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Marks in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Index of the central column.
pub const CENTER_COLUMN: usize = COLS / 2;
