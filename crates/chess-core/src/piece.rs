//! Chess piece representation.

use serde::{Deserialize, Serialize};

use crate::Color;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Returns the FEN character for this piece with the given color.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN character into a piece and color.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }

    /// Returns the letter used in move notation, or `None` for pawns.
    pub const fn notation_char(self) -> Option<char> {
        match self {
            Piece::Pawn => None,
            Piece::Knight => Some('N'),
            Piece::Bishop => Some('B'),
            Piece::Rook => Some('R'),
            Piece::Queen => Some('Q'),
            Piece::King => Some('K'),
        }
    }

    /// Returns true if this piece slides along ranks and files.
    #[inline]
    pub const fn slides_orthogonally(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }

    /// Returns true if this piece slides along diagonals.
    #[inline]
    pub const fn slides_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on the board: its type, its owner, and whether it has moved.
///
/// `has_moved` is recorded when a move is applied. No rule reads it; it is kept
/// so that the history of a piece survives in the board value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColoredPiece {
    pub piece: Piece,
    pub color: Color,
    #[serde(default)]
    pub has_moved: bool,
}

impl ColoredPiece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(piece: Piece, color: Color) -> Self {
        ColoredPiece {
            piece,
            color,
            has_moved: false,
        }
    }

    /// Returns a copy of this piece flagged as moved.
    #[inline]
    pub const fn moved(self) -> Self {
        ColoredPiece {
            has_moved: true,
            ..self
        }
    }

    /// Returns a copy of this piece with a different type, keeping color and flag.
    #[inline]
    pub const fn promoted_to(self, piece: Piece) -> Self {
        ColoredPiece { piece, ..self }
    }

    /// Returns true if this piece is of the given type and color.
    #[inline]
    pub fn is(self, piece: Piece, color: Color) -> bool {
        self.piece == piece && self.color == color
    }

    /// Returns the FEN character for this piece.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        self.piece.to_fen_char(self.color)
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.piece)
    }
}
