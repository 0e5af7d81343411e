use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row step a pawn of this color advances by. White starts on rows 6-7.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Upper-case letter used in move notation; pawns have none.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    fn from_fen_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A board coordinate. Row 0 is rank 8, column 0 is file `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics when either coordinate is outside `0..8`.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < 8 && col < 8,
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Returns `None` instead of panicking for off-board coordinates.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// All 64 squares in row-major scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(ParseError::Square(s.to_string()));
        }
        let col = b[0] - b'a';
        let row = b'8' - b[1];
        Ok(Square::new(row, col))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Always equal to the square holding this piece on its board.
    pub position: Square,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    pub(crate) fn from_fen_char(ch: char, position: Square) -> Option<Self> {
        let kind = PieceKind::from_fen_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, position))
    }

    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses `e2e4`. A trailing promotion letter (`e7e8q`) is accepted and
    /// ignored since pawns always promote to a queen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=5).contains(&s.len()) || !s.is_ascii() {
            return Err(ParseError::Move(s.to_string()));
        }
        if s.len() == 5 && PieceKind::from_fen_char(s.as_bytes()[4] as char).is_none() {
            return Err(ParseError::Move(s.to_string()));
        }
        let from = s[0..2].parse()?;
        let to = s[2..4].parse()?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
