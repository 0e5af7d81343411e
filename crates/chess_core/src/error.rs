//! Error types for parsing and game-flow operations.
//!
//! Off-board coordinates handed to `Square::new` or moving from an empty
//! square are contract violations and panic instead.

use thiserror::Error;

use crate::types::{Color, Move, Square};

/// Errors produced while reading squares, moves, FEN strings or UCI commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    Square(String),

    #[error("invalid move: {0:?}")]
    Move(String),

    #[error("invalid FEN: {0}")]
    Fen(String),

    #[error("move {0} is not legal in this position")]
    IllegalMove(Move),

    #[error("invalid position command: {0}")]
    Position(String),
}

/// Errors returned by [`crate::Game`] when a requested move is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("piece on {square} belongs to {color}, but it is not their turn")]
    WrongSide { square: Square, color: Color },

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("engine returned no move for {0}")]
    NoMove(Color),
}
