//! Error types for board construction and move application.

/// Errors from building a [`Board`](crate::Board) or applying a drop to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The column index is not in `0..7`.
    #[error("column {column} is out of range")]
    ColumnOutOfRange {
        /// The offending column.
        column: usize,
    },
    /// The column has no empty cell left.
    #[error("column {column} is full")]
    ColumnFull {
        /// The full column.
        column: usize,
    },
    /// The grid does not have exactly 6 rows.
    #[error("expected 6 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not have exactly 7 cells.
    #[error("row {row} has {found} cells, expected 7")]
    WrongRowLength {
        /// Zero-based row index (0 = top).
        row: usize,
        /// Number of cells found.
        found: usize,
    },
    /// A cell holds something other than 0, 1 or 2.
    #[error("invalid mark {value} at row {row}, column {col}")]
    InvalidMark {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The raw value.
        value: i64,
    },
    /// An unrecognized character appeared in the compact board text.
    #[error("invalid board character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// An occupied cell sits above an empty one.
    #[error("piece at row {row}, column {col} is floating above an empty cell")]
    FloatingPiece {
        /// Row of the floating piece.
        row: usize,
        /// Column of the floating piece.
        col: usize,
    },
}
