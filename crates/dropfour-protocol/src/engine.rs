//! Synchronous protocol loop: one command in, zero or more lines out.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, info, warn};

use dropfour_core::Board;
use dropfour_engine::{EngineConfig, MoveResult, SearchLimits, Searcher, TimeBudget};

use crate::command::{Command, EngineOption, GoParams, parse_command, side_to_move};
use crate::error::ProtocolError;

/// Holds the current board and the searcher between commands.
#[derive(Debug, Default)]
pub struct ProtocolEngine {
    board: Board,
    searcher: Searcher,
}

impl ProtocolEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::empty(),
            searcher: Searcher::new(config),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        self.searcher.config()
    }

    /// Run the loop on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), ProtocolError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the loop over arbitrary input and output.
    ///
    /// Parse errors are logged and skipped; only I/O failures end the loop
    /// early.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => warn!(error = %e, "command parse error"),
            }
            output.flush()?;
        }

        info!("dropfour shutting down");
        Ok(())
    }

    /// Apply one command, writing any response to `output`.
    pub fn handle<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<(), ProtocolError> {
        match cmd {
            Command::NewGame => self.handle_newgame(),
            Command::IsReady => writeln!(output, "readyok")?,
            Command::Position(board) => self.handle_position(board),
            Command::Go(params) => self.handle_go(params, output)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit | Command::Unknown(_) => {}
        }
        Ok(())
    }

    fn handle_newgame(&mut self) {
        self.board = Board::empty();
    }

    fn handle_position(&mut self, board: Board) {
        debug!(%board, "position set");
        self.board = board;
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        let config = self.searcher.config_mut();
        match option {
            EngineOption::TimeBudget(budget) => config.time_budget = budget,
            EngineOption::MaxExtensions(n) => config.max_extensions = n,
            EngineOption::ThreatBonusDepth(n) => config.depth.threat_bonus = n,
        }
        debug!(?option, "option set");
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), ProtocolError> {
        let player = params.player.unwrap_or_else(|| side_to_move(&self.board));
        let limits = limits_from_go(&params, self.searcher.config());

        let start = Instant::now();
        let mut write_error = None;
        let result = self.searcher.search(&self.board, player, &params.legal, &limits, |depth, score, nodes, column| {
            let column = column.map_or(-1, |c| c as i64);
            let written = writeln!(
                output,
                "info depth {depth} score {score} nodes {nodes} time {} column {column}",
                start.elapsed().as_millis()
            );
            if let Err(e) = written {
                write_error.get_or_insert(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e.into());
        }

        write_bestmove(output, &result)?;
        Ok(())
    }
}

/// Map `go` parameters onto search limits.
///
/// | Parameters | Depth | Clock |
/// |---|---|---|
/// | `infinite` | `depth` or policy | none |
/// | `movetime` | `depth` or policy | movetime |
/// | `depth` only | `depth` | none |
/// | bare | policy | configured budget |
pub fn limits_from_go(params: &GoParams, config: &EngineConfig) -> SearchLimits {
    let budget = if params.infinite {
        TimeBudget::Unlimited
    } else if let Some(movetime) = params.movetime {
        TimeBudget::Limited(movetime)
    } else if params.depth.is_some() {
        TimeBudget::Unlimited
    } else {
        TimeBudget::Limited(config.time_budget)
    };
    SearchLimits {
        depth: params.depth,
        budget,
    }
}

fn write_bestmove<W: Write>(output: &mut W, result: &MoveResult) -> io::Result<()> {
    let column = result.column.map_or(-1, |c| c as i64);
    writeln!(
        output,
        "bestmove {column} score {} depth {} time {:.3}",
        result.score,
        result.depth,
        result.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        ProtocolEngine::default()
            .run_with(script.as_bytes(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn isready_answers_readyok() {
        assert_eq!(run_script("isready\n"), "readyok\n");
    }

    #[test]
    fn quit_stops_processing() {
        assert_eq!(run_script("quit\nisready\n"), "");
    }

    #[test]
    fn parse_errors_do_not_stop_the_loop() {
        assert_eq!(run_script("position nonsense\ngo depth\nisready\n"), "readyok\n");
    }

    #[test]
    fn go_on_empty_board_reports_each_depth() {
        let out = run_script("newgame\ngo player 1 depth 3\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4, "{out}");
        assert!(lines[0].starts_with("info depth 1 "));
        assert!(lines[2].starts_with("info depth 3 "));
        assert!(lines[3].starts_with("bestmove 3 "), "{out}");
        assert!(lines[3].contains(" depth 3 "));
    }

    #[test]
    fn tactical_answer_has_no_info_lines() {
        let out = run_script("position startpos moves 0 6 1 6 2\ngo player 2 depth 4\n");
        assert!(out.starts_with("bestmove 3 score -500000 depth 1 time "), "{out}");
    }

    #[test]
    fn full_board_reports_minus_one() {
        let out = run_script("position 1122112/2211221/1122112/2211221/1122112/2211221\ngo\n");
        assert_eq!(out, "bestmove -1 score 0 depth 0 time 0.000\n");
    }

    #[test]
    fn setoption_updates_config() {
        let mut engine = ProtocolEngine::default();
        let mut sink = Vec::new();
        engine
            .handle(Command::SetOption(EngineOption::TimeBudget(Duration::from_millis(40))), &mut sink)
            .unwrap();
        engine
            .handle(Command::SetOption(EngineOption::MaxExtensions(0)), &mut sink)
            .unwrap();
        engine
            .handle(Command::SetOption(EngineOption::ThreatBonusDepth(3)), &mut sink)
            .unwrap();
        assert_eq!(engine.config().time_budget, Duration::from_millis(40));
        assert_eq!(engine.config().max_extensions, 0);
        assert_eq!(engine.config().depth.threat_bonus, 3);
        assert!(sink.is_empty());
    }

    #[test]
    fn limits_mapping() {
        let config = EngineConfig::default();
        let bare = limits_from_go(&GoParams::default(), &config);
        assert_eq!(bare, SearchLimits::from_config(&config));

        let depth = GoParams { depth: Some(4), ..GoParams::default() };
        assert_eq!(limits_from_go(&depth, &config), SearchLimits::depth_only(4));

        let timed = GoParams { movetime: Some(Duration::from_millis(20)), ..GoParams::default() };
        assert_eq!(
            limits_from_go(&timed, &config).budget,
            TimeBudget::Limited(Duration::from_millis(20))
        );

        let infinite = GoParams { infinite: true, movetime: Some(Duration::from_millis(20)), ..GoParams::default() };
        assert_eq!(limits_from_go(&infinite, &config).budget, TimeBudget::Unlimited);
    }
}
