//! Algebraic notation for applied moves.
//!
//! The format is a simplified SAN used for move-history display:
//! - piece letter (none for pawns)
//! - the origin file for every non-pawn move, whether or not another piece
//!   could reach the same square
//! - the origin file for pawn captures
//! - `x` on capture, then the destination square
//! - `=Q` on promotion
//! - `#` if the opponent is checkmated, `+` if the opponent is in check
//!
//! Examples: "e4", "Ngf3", "exd5", "Qdxf7#", "e8=Q+"

use chess_core::{ColoredPiece, Piece, Square};

use crate::status::{classify, GameStatus};
use crate::Board;

/// Renders the notation for moving the piece on `from` to `to`.
///
/// `before` is the board the move was played on and `after` the board it
/// produced. Returns `None` if `before` has no piece on `from`.
pub fn move_to_notation(before: &Board, from: Square, to: Square, after: &Board) -> Option<String> {
    let mover = before.piece_at(from)?;
    let is_capture = before.piece_at(to).is_some();
    Some(notation_for(mover, is_capture, from, to, after))
}

/// Builds the notation for a move whose mover is already known.
pub(crate) fn notation_for(
    mover: ColoredPiece,
    is_capture: bool,
    from: Square,
    to: Square,
    after: &Board,
) -> String {
    let mut notation = String::new();

    if let Some(letter) = mover.piece.notation_char() {
        notation.push(letter);
        notation.push(from.file().to_char());
    }

    if is_capture {
        if mover.piece == Piece::Pawn {
            notation.push(from.file().to_char());
        }
        notation.push('x');
    }

    notation.push(to.file().to_char());
    notation.push(to.rank().to_char());

    let promoted = after
        .piece_at(to)
        .is_some_and(|p| p.piece != mover.piece);
    if promoted {
        notation.push_str("=Q");
    }

    notation.push_str(check_suffix(after, mover.color.opposite()));
    notation
}

fn check_suffix(after: &Board, opponent: chess_core::Color) -> &'static str {
    match classify(after, opponent) {
        GameStatus::Checkmate => "#",
        GameStatus::Check => "+",
        GameStatus::Normal | GameStatus::Stalemate => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply_move;
    use chess_core::FenParser;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn notation_of(fen: &str, from: &str, to: &str) -> String {
        let board = Board::from_fen(fen).unwrap();
        apply_move(&board, sq(from), sq(to)).unwrap().notation
    }

    #[test]
    fn pawn_push() {
        assert_eq!(notation_of(FenParser::STARTPOS, "e2", "e4"), "e4");
    }

    #[test]
    fn piece_move_always_has_origin_file() {
        assert_eq!(notation_of(FenParser::STARTPOS, "g1", "f3"), "Ngf3");
        assert_eq!(notation_of(FenParser::STARTPOS, "b1", "c3"), "Nbc3");
    }

    #[test]
    fn pawn_capture_has_origin_file() {
        let fen = "4k3/8/8/3p4/4P3/8/8/4K3 w";
        assert_eq!(notation_of(fen, "e4", "d5"), "exd5");
    }

    #[test]
    fn piece_capture() {
        let fen = "4k3/8/8/3p4/8/8/8/3RK3 w";
        assert_eq!(notation_of(fen, "d1", "d5"), "Rdxd5");
    }

    #[test]
    fn king_move() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w";
        assert_eq!(notation_of(fen, "e1", "f2"), "Kef2");
    }

    #[test]
    fn check_suffix_plus() {
        let fen = "4k3/8/8/8/8/8/8/R3K3 w";
        assert_eq!(notation_of(fen, "a1", "a8"), "Raa8+");
    }

    #[test]
    fn checkmate_suffix_hash() {
        // Fool's mate: 1.f3 e5 2.g4 Qh4#
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b";
        assert_eq!(notation_of(fen, "d8", "h4"), "Qdh4#");
    }

    #[test]
    fn stalemate_gets_no_suffix() {
        let fen = "7k/8/6K1/8/8/8/5Q2/8 w";
        assert_eq!(notation_of(fen, "f2", "f7"), "Qff7");
    }

    #[test]
    fn promotion_suffix() {
        let fen = "k7/4P3/8/8/8/8/8/4K3 w";
        assert_eq!(notation_of(fen, "e7", "e8"), "e8=Q+");
    }

    #[test]
    fn promotion_with_capture() {
        let fen = "3rk3/4P3/8/8/8/8/8/K7 w";
        assert_eq!(notation_of(fen, "e7", "d8"), "exd8=Q+");
    }

    #[test]
    fn empty_source_has_no_notation() {
        let board = Board::initial_position();
        assert_eq!(move_to_notation(&board, sq("e4"), sq("e5"), &board), None);
    }
}
