//! Protocol errors.

use dropfour_core::BoardError;

/// Errors that can occur while handling protocol input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command has neither a board nor `startpos`.
    #[error("malformed position command: expected startpos or a board")]
    MalformedPosition,

    /// The board text after `position` did not parse.
    #[error("invalid board '{text}': {source}")]
    InvalidBoard {
        text: String,
        #[source]
        source: BoardError,
    },

    /// A column after `moves` was not a playable column.
    #[error("invalid move '{token}'")]
    InvalidMove { token: String },

    /// A `go` parameter was given without a value.
    #[error("missing value for {param}")]
    MissingGoValue { param: String },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value for {param}: {value}")]
    InvalidGoValue { param: String, value: String },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    /// `setoption` without the `name ... value ...` shape.
    #[error("malformed setoption command")]
    MalformedOption,

    /// An option value could not be parsed.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue { name: String, value: String },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
