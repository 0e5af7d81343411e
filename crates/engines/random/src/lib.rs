//! Random Move Chess Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline opponent in matches (the minimax engine should beat it easily)
//! - Stress testing move generation and game flow

use chess_core::{legal_moves_into, Board, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine whose move choices repeat for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> SearchResult {
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(board, board.side_to_move, &mut moves);

        self.nodes = moves.len() as u64;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
