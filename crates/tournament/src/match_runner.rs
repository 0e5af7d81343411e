//! Match runner for playing games between engines

use chess_core::{legal_moves, Color, Engine, Game, GameError, GameStatus};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, MatchConfig};
use crate::results::{GameOutcome, GameRecord, MatchReport};

/// Errors that abort a match
#[derive(Error, Debug)]
pub enum MatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An engine produced a move the game refused
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective. An engine that returns an
    /// illegal move aborts the match with the refusing [`GameError`].
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchReport, MatchError> {
        self.config.validate()?;
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config.clone());
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for game_num in 0..self.config.games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let mut record = if engine1_white {
                self.play_game(engine1, engine2, &mut rng)?
            } else {
                self.play_game(engine2, engine1, &mut rng)?
            };
            record.number = game_num + 1;
            record.result = if engine1_white {
                record.outcome.for_white()
            } else {
                record.outcome.for_white().flipped()
            };

            info!(
                game = record.number,
                white = %record.white,
                black = %record.black,
                result = record.outcome.for_white().symbol(),
                plies = record.moves.len(),
                outcome = ?record.outcome,
                "game finished"
            );
            report.add_game(record);
        }

        info!(
            wins = report.result.wins,
            losses = report.result.losses,
            draws = report.result.draws,
            "match finished"
        );
        Ok(report)
    }

    /// Play a single game; the record's result is from White's perspective
    fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
        rng: &mut StdRng,
    ) -> Result<GameRecord, MatchError> {
        let board = self.config.start_board().map_err(ConfigError::from)?;
        let mut game = Game::from_board(board);
        white.new_game();
        black.new_game();

        for _ in 0..self.config.opening_plies {
            if game.status().is_over() {
                break;
            }
            let moves = legal_moves(game.board(), game.side_to_move());
            let Some(&mv) = moves.choose(rng) else {
                break;
            };
            game.play(mv)?;
        }

        let outcome = loop {
            match game.status() {
                GameStatus::Checkmate {
                    winner: Color::White,
                } => break GameOutcome::WhiteMates,
                GameStatus::Checkmate {
                    winner: Color::Black,
                } => break GameOutcome::BlackMates,
                GameStatus::Stalemate => break GameOutcome::Stalemate,
                GameStatus::InProgress | GameStatus::Check => {}
            }
            if game.history().count() >= self.config.max_moves as usize {
                break GameOutcome::MoveLimit;
            }

            // Fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let engine: &mut dyn Engine = match game.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let record = game.play_engine_move(engine, limits)?;
            debug!(ply = record.ply, mv = %record.mv, notation = %record.notation, "engine moved");
        };

        Ok(GameRecord {
            number: 0,
            white: white.name().to_string(),
            black: black.name().to_string(),
            moves: game.history().map(|r| r.mv.to_string()).collect(),
            notation: game.history().map(|r| r.notation.clone()).collect(),
            outcome,
            result: outcome.for_white(),
        })
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    games: u32,
    depth: u8,
) -> Result<MatchReport, MatchError> {
    let config = MatchConfig {
        games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
