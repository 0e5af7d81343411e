//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material, centre
//! control and mobility evaluation.

mod eval;
mod search;

use chess_core::{Board, Engine, SearchLimits, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Two-branch minimax (maximizing for the side to move at the root)
/// - Material plus centre bonus plus mobility evaluation
/// - Checkmate and stalemate scoring inside the horizon
/// - Time control support for move time limits and `stop`
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let depth = SearchLimits::clamp_depth(limits.depth);
        let outcome = search::pick_best_move(
            board,
            board.side_to_move,
            depth,
            &mut self.nodes,
            &limits.time_control,
        );

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{evaluate, piece_value, CENTER_BONUS};
pub use search::{pick_best_move, SearchOutcome, MATE_SCORE};
