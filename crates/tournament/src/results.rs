//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::config::MatchConfig;

/// Errors from saving or loading a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a single game from engine1's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other engine.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// PGN-style result string ("1-0", "0-1", "1/2")
    pub fn symbol(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2",
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    WhiteMates,
    BlackMates,
    Stalemate,
    /// `max_moves` plies were played without a result
    MoveLimit,
}

impl GameOutcome {
    /// Result from White's perspective
    pub fn for_white(self) -> GameResult {
        match self {
            GameOutcome::WhiteMates => GameResult::Win,
            GameOutcome::BlackMates => GameResult::Loss,
            GameOutcome::Stalemate | GameOutcome::MoveLimit => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// 1-based game number within the match
    pub number: u32,
    pub white: String,
    pub black: String,
    /// Moves in coordinate notation, openings included
    pub moves: Vec<String>,
    /// Human-readable notation for the same moves
    pub notation: Vec<String>,
    pub outcome: GameOutcome,
    /// Result for engine1
    pub result: GameResult,
}

/// Complete match results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    /// Configuration used
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, config: MatchConfig) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            config,
            result: MatchResult::new(),
            games: Vec::new(),
        }
    }

    /// Add a finished game and count it
    pub fn add_game(&mut self, game: GameRecord) {
        self.result.record(game.result);
        self.games.push(game);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, depth {}, max {} plies\n\n",
            self.config.games, self.config.depth, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<6} {:<16} {:<16} {:<6} {:>6}  {}\n",
            "Game", "White", "Black", "Result", "Plies", "Ending"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for game in &self.games {
            report.push_str(&format!(
                "{:<6} {:<16} {:<16} {:<6} {:>6}  {:?}\n",
                game.number,
                game.white,
                game.black,
                game.outcome.for_white().symbol(),
                game.moves.len(),
                game.outcome
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
