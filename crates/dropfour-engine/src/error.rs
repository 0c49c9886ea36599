//! Error type for the move-request boundary.

use dropfour_core::BoardError;

/// Errors raised while validating a move request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The supplied grid is not a valid position.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),

    /// The player id is neither 1 nor 2.
    #[error("invalid player id {value}, expected 1 or 2")]
    InvalidPlayer { value: i64 },
}
