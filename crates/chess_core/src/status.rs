//! Terminal-state classification for the side to move.

use std::fmt;

use crate::{board::Board, movegen::has_any_legal_move, types::Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game; nothing follows them.
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Classifies the position for `color`, assumed to be the side to move.
pub fn classify(board: &Board, color: Color) -> GameStatus {
    let in_check = board.in_check(color);
    let can_move = has_any_legal_move(board, color);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: color.other(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
