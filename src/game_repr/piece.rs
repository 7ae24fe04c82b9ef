use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Type {
    /// Lowercase letter used in FEN and long-algebraic promotion suffixes.
    pub fn to_char(self) -> char {
        match self {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Type::King),
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            'p' => Some(Type::Pawn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// White is the maximizing side of every score in this crate.
    pub fn is_maximizing(&self) -> bool {
        *self == Color::White
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}

/// Square name (`"e4"`) for a `0..64` index with a1 = 0.
pub fn square_name(square: u8) -> String {
    let file = (b'a' + square % 8) as char;
    let rank = (b'1' + square / 8) as char;
    format!("{}{}", file, rank)
}

/// Inverse of [`square_name`].
pub fn parse_square(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file < 8 && rank < 8 {
        Some(rank * 8 + file)
    } else {
        None
    }
}
