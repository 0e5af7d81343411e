//! Match settings loaded from TOML

use std::path::{Path, PathBuf};
use std::time::Duration;

use chess_core::{Board, ParseError, SearchLimits, MAX_DEPTH, MIN_DEPTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or validating a match configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("depth {0} is outside {min}..={max}", min = MIN_DEPTH, max = MAX_DEPTH)]
    Depth(u8),

    #[error("a match needs at least one game")]
    NoGames,

    #[error("bad start position: {0}")]
    StartPosition(#[from] ParseError),
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Time budget per move in milliseconds (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random legal plies played before the engines take over
    pub opening_plies: u32,
    /// Seed for opening moves (None = fresh entropy)
    pub seed: Option<u64>,
    /// FEN to start every game from (None = standard set-up)
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            depth: 2,
            max_moves: 200,
            move_time_ms: None,
            alternate_colors: true,
            opening_plies: 0,
            seed: None,
            start_fen: None,
        }
    }
}

impl MatchConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::Depth(self.depth));
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        self.start_board()?;
        Ok(())
    }

    /// The position every game starts from.
    pub fn start_board(&self) -> Result<Board, ParseError> {
        match &self.start_fen {
            Some(fen) => Board::from_fen(fen),
            None => Ok(Board::startpos()),
        }
    }

    /// Fresh search limits for one move (each call gets its own clock).
    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
