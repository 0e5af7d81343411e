//! Static evaluation: material, centre control and mobility.

use chess_core::{legal_move_count, Board, Color, PieceKind};

/// Centre control weights. The four central squares count double.
pub const CENTER_BONUS: [[u8; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 1, 2, 2, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const CENTER_WEIGHT: f64 = 0.1;
const MOBILITY_WEIGHT: f64 = 0.1;

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 1000.0,
    }
}

/// Evaluates the board from `perspective`'s point of view.
///
/// Returns a score in pawns:
/// - Positive = good for `perspective`
/// - Negative = bad for `perspective`
///
/// The mobility term counts fully legal moves for both sides, so one call
/// simulates every legal move on the board.
pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    let mut score = 0.0;

    for pc in board.all_pieces() {
        let bonus = CENTER_BONUS[pc.position.row() as usize][pc.position.col() as usize];
        let v = piece_value(pc.kind) + CENTER_WEIGHT * f64::from(bonus);
        if pc.color == perspective {
            score += v;
        } else {
            score -= v;
        }
    }

    let ours = legal_move_count(board, perspective) as f64;
    let theirs = legal_move_count(board, perspective.other()) as f64;
    score + MOBILITY_WEIGHT * (ours - theirs)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
