//! Protocol command parsing.

use std::time::Duration;

use dropfour_core::{Board, Player};

use crate::error::ProtocolError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` searches for the side to move under
/// the configured time budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Player to move; inferred from the piece count when absent.
    pub player: Option<Player>,
    /// Caller's legal columns, used only if the board has none.
    pub legal: Vec<usize>,
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Soft time budget for this search.
    pub movetime: Option<Duration>,
    /// Search without a clock.
    pub infinite: bool,
}

/// An engine setting changed through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Soft time budget in milliseconds.
    TimeBudget(Duration),
    /// Threat extensions allowed per line.
    MaxExtensions(u8),
    /// Depth added when either side holds an open three.
    ThreatBonusDepth(u8),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `newgame`: reset to the empty board.
    NewGame,
    /// `isready`: synchronization ping.
    IsReady,
    /// `position`: set the board.
    Position(Board),
    /// `go`: pick a move.
    Go(GoParams),
    /// `setoption name <Name> value <V>`.
    SetOption(EngineOption),
    /// `quit`: leave the loop.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "newgame" => Ok(Command::NewGame),
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(rest),
        "go" => parse_go(rest),
        "setoption" => parse_setoption(rest),
        _ => Ok(Command::Unknown(first.to_string())),
    }
}

/// Parse the `position` arguments.
///
/// - `position startpos [moves 3 3 4 ...]`
/// - `position <compact-board> [moves ...]`
///
/// Moves alternate starting from the player whose turn it is by piece count.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let Some((&first, rest)) = tokens.split_first() else {
        return Err(ProtocolError::MalformedPosition);
    };

    let mut board = if first == "startpos" {
        Board::empty()
    } else if first == "moves" {
        return Err(ProtocolError::MalformedPosition);
    } else {
        first.parse::<Board>().map_err(|source| ProtocolError::InvalidBoard {
            text: first.to_string(),
            source,
        })?
    };

    if let Some((&"moves", columns)) = rest.split_first() {
        let mut player = side_to_move(&board);
        for token in columns {
            let column: usize = token.parse().map_err(|_| ProtocolError::InvalidMove {
                token: token.to_string(),
            })?;
            board = board
                .apply(column, player)
                .map_err(|_| ProtocolError::InvalidMove {
                    token: token.to_string(),
                })?
                .board;
            player = player.opponent();
        }
    }

    Ok(Command::Position(board))
}

/// Player to move when turns alternate from [`Player::One`].
pub fn side_to_move(board: &Board) -> Player {
    if board.piece_count() % 2 == 0 {
        Player::One
    } else {
        Player::Two
    }
}

/// Parse the `go` arguments. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "player" => {
                let id: i64 = parse_int(tokens.get(i + 1), "player")?;
                let player = Player::from_id(id).ok_or_else(|| ProtocolError::InvalidGoValue {
                    param: "player".to_string(),
                    value: id.to_string(),
                })?;
                params.player = Some(player);
                i += 2;
            }
            "legal" => {
                i += 1;
                while let Some(column) = tokens.get(i).and_then(|t| t.parse::<usize>().ok()) {
                    params.legal.push(column);
                    i += 1;
                }
            }
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "infinite" => {
                params.infinite = true;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <Name> value <V>`. Names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let (name, value) = match *tokens {
        ["name", name, "value", value] => (name, value),
        _ => return Err(ProtocolError::MalformedOption),
    };

    let invalid = || ProtocolError::InvalidOptionValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "timebudget" => EngineOption::TimeBudget(Duration::from_millis(
            value.parse().map_err(|_| invalid())?,
        )),
        "maxextensions" => EngineOption::MaxExtensions(value.parse().map_err(|_| invalid())?),
        "threatbonusdepth" => EngineOption::ThreatBonusDepth(value.parse().map_err(|_| invalid())?),
        _ => {
            return Err(ProtocolError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, ProtocolError> {
    parse_int::<u64>(token, param).map(Duration::from_millis)
}

fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
