pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod status;
pub mod time_control;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use status::*;
pub use time_control::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait — implemented by the minimax and random engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Search value from the searching side's perspective. `±10000` marks a
    /// forced mate inside the horizon, `0` a forced stalemate.
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early through the time control
    pub stopped: bool,
}

/// Trait that all chess engines must implement.
///
/// Engines always move for `board.side_to_move`.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "chess-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
