//! Per-piece move generation and the legality filter built on top of it.
//!
//! The generators are pure: they read occupancy and ignore check. Every
//! generator walks its directions in a fixed order so that enumeration
//! order (and therefore search tie-breaking) is deterministic.

use crate::{board::Board, types::*};

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal destination squares for `piece`: occupancy respected,
/// self-check ignored.
pub fn pseudo_legal_targets(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_targets_into(piece, board, &mut out);
    out
}

fn pseudo_legal_targets_into(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(piece, board, out),
        PieceKind::Knight => knight_targets(piece, board, out),
        PieceKind::Bishop => bishop_targets(piece, board, out),
        PieceKind::Rook => rook_targets(piece, board, out),
        PieceKind::Queen => queen_targets(piece, board, out),
        PieceKind::King => king_targets(piece, board, out),
    }
}

pub fn pawn_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    let from = piece.position;
    let dir = piece.color.forward();

    // forward 1, then forward 2 from the start row through an empty square
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);
        if from.row() == piece.color.pawn_start_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // diagonal captures only; no en passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.is_opponent_of(piece)
        {
            out.push(to);
        }
    }
}

pub fn knight_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    gen_leaper(piece, board, out, &KNIGHT_OFFSETS);
}

pub fn bishop_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    gen_slider(piece, board, out, &BISHOP_DIRS);
}

pub fn rook_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    gen_slider(piece, board, out, &ROOK_DIRS);
}

pub fn queen_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    gen_slider(piece, board, out, &QUEEN_DIRS);
}

pub fn king_targets(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    gen_leaper(piece, board, out, &KING_OFFSETS);
}

fn gen_leaper(piece: &Piece, board: &Board, out: &mut Vec<Square>, offsets: &[(i8, i8)]) {
    for &(dr, dc) in offsets {
        if let Some(to) = piece.position.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.is_opponent_of(piece) => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(piece: &Piece, board: &Board, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = piece.position.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.is_opponent_of(piece) => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Destinations for `piece` that do not leave its own king attacked.
///
/// `piece` must be the piece currently standing on `piece.position`.
pub fn legal_targets(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut out = pseudo_legal_targets(piece, board);
    let from = piece.position;
    out.retain(|&to| !board.would_cause_own_check(Move::new(from, to), piece.color));
    out
}

/// Generate all legal moves for `color`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, color, &mut out);
    out
}

/// Generate all legal moves for `color` into the provided buffer, reusing it
/// across calls. Pieces are visited in board scan order.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for piece in board.pieces(color) {
        out.extend(
            legal_targets(board, &piece)
                .into_iter()
                .map(|to| Move::new(piece.position, to)),
        );
    }
}

/// Sum of legal destination counts over every piece of `color`.
pub fn legal_move_count(board: &Board, color: Color) -> usize {
    board
        .pieces(color)
        .map(|piece| legal_targets(board, &piece).len())
        .sum()
}

/// True as soon as any piece of `color` has a legal move.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|piece| !legal_targets(board, &piece).is_empty())
}

pub(crate) fn attacks_square(piece: &Piece, board: &Board, target: Square, buf: &mut Vec<Square>) -> bool {
    buf.clear();
    pseudo_legal_targets_into(piece, board, buf);
    buf.contains(&target)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
