//! Game flow: validated moves, history and undo/redo.
//!
//! This is the layer a front-end drives. It owns the single authoritative
//! [`Board`]; everything it asks of the rules engine goes through
//! [`legal_targets`], [`classify`] and [`Board::make_move`].

use tracing::debug;

use crate::error::GameError;
use crate::movegen::legal_targets;
use crate::status::{GameStatus, classify};
use crate::time_control::SearchLimits;
use crate::types::*;
use crate::{Board, Engine};

/// A move that has been played, with what it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based half-move number
    pub ply: usize,
    pub color: Color,
    pub kind: PieceKind,
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Piece letter, `x` on capture, destination square (`Nxf3`, `e4`)
    pub notation: String,
}

#[derive(Debug, Clone)]
struct Played {
    before: Board,
    record: MoveRecord,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    played: Vec<Played>,
    redo: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::startpos())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            played: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        classify(&self.board, self.board.side_to_move)
    }

    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.played.iter().map(|p| &p.record)
    }

    /// Whether `undo` would succeed: false once the game is over.
    pub fn can_undo(&self) -> bool {
        !self.played.is_empty() && !self.status().is_over()
    }

    /// Whether `redo` would succeed: false once the game is over.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty() && !self.status().is_over()
    }

    /// Legal destinations for the piece on `from`, empty if there is none.
    pub fn legal_targets_from(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(from) {
            Some(piece) => legal_targets(&self.board, &piece),
            None => Vec::new(),
        }
    }

    /// Validates and plays `mv` for the side to move. Clears the redo stack.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        let record = self.apply(mv)?;
        self.redo.clear();
        Ok(record)
    }

    fn apply(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(GameError::EmptySquare(mv.from))?;
        if piece.color != self.board.side_to_move {
            return Err(GameError::WrongSide {
                square: mv.from,
                color: piece.color,
            });
        }
        if !legal_targets(&self.board, &piece).contains(&mv.to) {
            return Err(GameError::IllegalMove(mv));
        }

        let before = self.board.clone();
        let captured = self.board.make_move(mv);

        let capture_mark = if captured.is_some() { "x" } else { "" };
        let record = MoveRecord {
            ply: self.played.len() + 1,
            color: piece.color,
            kind: piece.kind,
            mv,
            captured,
            notation: format!("{}{}{}", piece.kind.letter(), capture_mark, mv.to),
        };
        debug!(ply = record.ply, mv = %mv, notation = %record.notation, "move played");

        self.played.push(Played {
            before,
            record: record.clone(),
        });
        Ok(record)
    }

    /// Takes back the last move. Refused once the game is over.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        if self.status().is_over() {
            return None;
        }
        let last = self.played.pop()?;
        self.board = last.before;
        self.redo.push(last.record.mv);
        Some(last.record)
    }

    /// Re-plays the most recently undone move.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        if self.status().is_over() {
            return None;
        }
        let mv = self.redo.pop()?;
        match self.apply(mv) {
            Ok(record) => Some(record),
            Err(_) => {
                self.redo.clear();
                None
            }
        }
    }

    /// Asks `engine` for a move for the side to move and plays it.
    pub fn play_engine_move(
        &mut self,
        engine: &mut dyn Engine,
        limits: SearchLimits,
    ) -> Result<MoveRecord, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameOver);
        }
        let result = engine.search(&self.board, limits);
        let mv = result
            .best_move
            .ok_or(GameError::NoMove(self.board.side_to_move))?;
        self.play(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
