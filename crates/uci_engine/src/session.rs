//! UCI command handling, independent of stdin/stdout.

use std::io::Write;

use anyhow::Result;
use chess_core::{move_to_uci, set_position_from_uci, Board, Engine, SearchLimits};
use tracing::{debug, warn};

pub const DEFAULT_DEPTH: u8 = 3;

/// Engine state between UCI commands.
pub struct UciSession<E: Engine> {
    engine: E,
    board: Board,
    depth: u8,
}

impl<E: Engine> UciSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            board: Board::startpos(),
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Handles one input line. Returns `false` once `quit` is received.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(true);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {DEFAULT_DEPTH} min {} max {}",
                    chess_core::MIN_DEPTH,
                    chess_core::MAX_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.board = Board::startpos();
                self.engine.new_game();
            }
            "position" => match set_position_from_uci(args) {
                Ok(board) => self.board = board,
                Err(e) => warn!(error = %e, "ignoring position command"),
            },
            "go" => self.go(args, out)?,
            // Search runs to completion before the next command is read
            "stop" => {}
            "quit" => return Ok(false),
            other => debug!(command = other, "unknown command"),
        }
        out.flush()?;
        Ok(true)
    }

    /// `setoption name <name> value <value>`
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&a| a == "name");
        let value_at = args.iter().position(|&a| a == "value");
        let (Some(n), Some(v)) = (name_at, value_at) else {
            warn!(?args, "malformed setoption");
            return;
        };
        if n >= v {
            warn!(?args, "malformed setoption");
            return;
        }
        let name = args[n + 1..v].join(" ");
        let value = args[v + 1..].join(" ");

        if name.eq_ignore_ascii_case("depth") {
            match value.parse::<u8>() {
                Ok(d) => self.depth = SearchLimits::clamp_depth(d),
                Err(_) => warn!(%value, "Depth must be a number"),
            }
        } else if !self.engine.set_option(&name, &value) {
            debug!(%name, "unknown option");
        }
    }

    /// `go [depth N]`; other search parameters are ignored.
    fn go(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let mut depth = self.depth;
        if let Some(i) = args.iter().position(|&a| a == "depth") {
            if let Some(d) = args.get(i + 1).and_then(|s| s.parse::<u8>().ok()) {
                depth = SearchLimits::clamp_depth(d);
            }
        }

        let result = self.engine.search(&self.board, SearchLimits::depth(depth));
        debug!(
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            "search done"
        );
        match result.best_move {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
            None => writeln!(out, "bestmove 0000")?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
