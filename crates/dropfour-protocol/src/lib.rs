//! Line-oriented text protocol for driving the dropfour engine.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, EngineOption, GoParams, parse_command};
pub use engine::ProtocolEngine;
pub use error::ProtocolError;
