//! Chess board representation.

use chess_core::{Color, ColoredPiece, FenError, FenParser, File, Piece, Rank, Square};
use std::fmt;

use crate::Bitboard;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 board mapping each square to an optional piece.
///
/// `Board` is a `Copy` value. Every operation that changes the arrangement
/// returns a new board and leaves `self` untouched, so a board handed to
/// another function can never be modified behind the caller's back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<ColoredPiece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Returns the standard starting arrangement.
    pub fn initial_position() -> Self {
        let mut board = Board::empty();
        for (file, piece) in File::ALL.into_iter().zip(BACK_RANK) {
            board.put(Square::new(file, Rank::R1), ColoredPiece::new(piece, Color::White));
            board.put(
                Square::new(file, Rank::R2),
                ColoredPiece::new(Piece::Pawn, Color::White),
            );
            board.put(
                Square::new(file, Rank::R7),
                ColoredPiece::new(Piece::Pawn, Color::Black),
            );
            board.put(Square::new(file, Rank::R8), ColoredPiece::new(piece, Color::Black));
        }
        board
    }

    /// Builds a board from a FEN string. Only the placement field is used.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_placement(&parsed))
    }

    /// Builds a board from already-parsed FEN data.
    pub fn from_placement(parsed: &FenParser) -> Self {
        let mut board = Board::empty();
        for (sq, piece, color) in parsed.placements() {
            board.put(sq, ColoredPiece::new(piece, color));
        }
        board
    }

    /// Renders the piece-placement field of a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(p) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(p.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank != Rank::R1 {
                fen.push('/');
            }
        }

        fen
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.index() as usize]
    }

    /// Returns a copy of this board with `piece` placed on `sq`.
    #[must_use]
    pub fn with_piece(&self, sq: Square, piece: ColoredPiece) -> Self {
        let mut next = *self;
        next.put(sq, piece);
        next
    }

    /// Returns a copy of this board with `sq` emptied.
    #[must_use]
    pub fn without_piece(&self, sq: Square) -> Self {
        let mut next = *self;
        next.squares[sq.index() as usize] = None;
        next
    }

    /// Returns a copy of this board with whatever stands on `from` moved to `to`.
    ///
    /// This is the bare relocation used to test a candidate move for
    /// self-check: no promotion, no `has_moved` bookkeeping.
    #[must_use]
    pub fn simulate(&self, from: Square, to: Square) -> Self {
        let mut next = *self;
        next.squares[to.index() as usize] = self.piece_at(from);
        next.squares[from.index() as usize] = None;
        next
    }

    /// Iterates over the occupied squares of one side, a1 to h8.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    /// Returns the set of squares occupied by one side.
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces(color).map(|(sq, _)| sq).collect()
    }

    /// Returns the square of the given side's king, scanning from a1.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    fn put(&mut self, sq: Square, piece: ColoredPiece) {
        self.squares[sq.index() as usize] = Some(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(p) => write!(f, "{} ", p.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
