//! FEN (Forsyth-Edwards Notation) piece-placement parsing.
//!
//! Only the piece placement and the active color are meaningful to the
//! rules engine. Castling, en passant and the move clocks are not modeled,
//! so any trailing fields are accepted and ignored.

use thiserror::Error;

use crate::{Color, File, Piece, Rank, Square};

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: empty string")]
    Empty,

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed FEN data.
///
/// Holds the validated placement string and the side to move. The engine
/// turns [`FenParser::placements`] into its own board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Side to move. Defaults to White when the field is absent.
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// The standard starting piece placement.
    pub const STARTPOS_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();

        let piece_placement = parts.next().ok_or(FenError::Empty)?;
        Self::validate_piece_placement(piece_placement)?;

        let active_color = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
        })
    }

    /// Returns every occupied square with its piece, rank 8 first.
    pub fn placements(&self) -> Vec<(Square, Piece, Color)> {
        let mut out = Vec::new();
        for (i, rank_str) in self.piece_placement.split('/').enumerate() {
            let rank = Rank::from_index(7 - i as u8);
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if let (Some(f), Some(r)) = (File::from_index(file), rank) {
                        out.push((Square::new(f, r), piece, color));
                    }
                    file += 1;
                }
            }
        }
        out
    }

    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let mut squares = 0;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    if d == 0 || d > 8 {
                        return Err(FenError::InvalidPiecePlacement(format!(
                            "invalid empty-square count '{}' in rank {}",
                            c,
                            8 - i
                        )));
                    }
                    squares += d;
                } else if "pnbrqkPNBRQK".contains(c) {
                    squares += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - i
                    )));
                }
            }
            if squares != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    squares
                )));
            }
        }

        Ok(())
    }
}
