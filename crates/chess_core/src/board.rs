use crate::error::ParseError;
use crate::types::*;

/// 8x8 grid of optional pieces plus the side to move.
///
/// `Clone` is a deep copy: pieces are plain values, so a cloned board never
/// shares storage with its source. Hypothetical moves are explored on such
/// clones (see [`Board::after_move`]) and the original is never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty(side_to_move: Color) -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty(Color::White);

        // Black on top (rows 0-1), White at the bottom (rows 6-7)
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            b.put(kind, Color::Black, Square::new(0, col));
            b.put(PieceKind::Pawn, Color::Black, Square::new(1, col));
            b.put(PieceKind::Pawn, Color::White, Square::new(6, col));
            b.put(kind, Color::White, Square::new(7, col));
        }
        b
    }

    /// Reads the piece-placement and side-to-move fields of a FEN string.
    ///
    /// Castling, en-passant and clock fields are accepted but ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ParseError::Fen(format!(
                "expected at least 2 fields, got {}",
                parts.len()
            )));
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::Fen(format!("invalid side to move {other:?}"))),
        };
        let mut board = Board::empty(side_to_move);

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ParseError::Fen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        // FEN lists rank 8 first, which is row 0
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    if col >= 8 {
                        return Err(ParseError::Fen(format!("too many files in rank {rank_str:?}")));
                    }
                    let sq = Square::new(row as u8, col);
                    let piece = Piece::from_fen_char(ch, sq)
                        .ok_or_else(|| ParseError::Fen(format!("invalid piece char {ch:?}")))?;
                    board.set_piece(sq, Some(piece));
                    col += 1;
                }
                if col > 8 {
                    return Err(ParseError::Fen(format!("too many files in rank {rank_str:?}")));
                }
            }
            if col != 8 {
                return Err(ParseError::Fen(format!("not enough files in rank {rank_str:?}")));
            }
        }

        Ok(board)
    }

    fn put(&mut self, kind: PieceKind, color: Color, sq: Square) {
        self.set_piece(sq, Some(Piece::new(kind, color, sq)));
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Writes a square, re-pointing the piece's stored position at it.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = pc.map(|mut p| {
            p.position = sq;
            p
        });
    }

    /// Pieces of one color in row-major scan order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .filter_map(move |pc| pc.filter(|p| p.color == c))
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|pc| *pc)
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    /// Plays `mv` on this board and returns the captured piece, if any.
    ///
    /// A pawn reaching its last row becomes a queen. The side to move flips.
    /// Panics if `mv.from` is empty.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let mut moved = self.piece_at(mv.from).expect("no piece on from-square");
        let captured = self.piece_at(mv.to);

        moved.has_moved = true;
        if moved.kind == PieceKind::Pawn && mv.to.row() == moved.color.promotion_row() {
            moved.kind = PieceKind::Queen;
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));
        self.side_to_move = self.side_to_move.other();

        captured
    }

    /// Returns a private copy of this board with `mv` applied.
    ///
    /// This is the only way hypothetical moves are explored; dropping the
    /// returned board discards the simulation.
    pub fn after_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
