//! Move generation.
//!
//! Destinations are produced per piece from movement geometry
//! ([`pseudo_legal_moves`]) and then filtered by simulating each one on a copy
//! of the board and discarding those that leave the mover's king attacked
//! ([`legal_moves`]).
//!
//! Castling and en passant are not generated. Promotion is applied when the
//! move is made, not here.

mod attacks;
pub mod perft;

use crate::{Bitboard, Board};
use chess_core::{Color, Piece, Square};

pub use attacks::{
    attackers_of, is_king_in_check, is_square_attacked, king_attacks, knight_attacks,
    pawn_attacks,
};

use attacks::{DIAGONAL, ORTHOGONAL};

/// Returns the legal destinations for the piece on `sq`.
///
/// The result is empty when `sq` is empty or holds a piece that does not
/// belong to `side_to_move`. Every returned square, if played, leaves the
/// mover's own king unattacked.
pub fn legal_moves(board: &Board, sq: Square, side_to_move: Color) -> Bitboard {
    match board.piece_at(sq) {
        Some(p) if p.color == side_to_move => pseudo_legal_moves(board, sq)
            .iter()
            .filter(|&to| !is_king_in_check(&board.simulate(sq, to), side_to_move))
            .collect(),
        _ => Bitboard::EMPTY,
    }
}

/// Returns every legal `(from, to)` pair for `side`, scanning from a1.
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<(Square, Square)> {
    board
        .pieces(side)
        .flat_map(|(from, _)| legal_moves(board, from, side).iter().map(move |to| (from, to)))
        .collect()
}

/// Returns the destinations allowed by the movement rules of the piece on
/// `sq`, ignoring whether its own king would be left in check.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> Bitboard {
    let Some(piece) = board.piece_at(sq) else {
        return Bitboard::EMPTY;
    };
    let own = board.occupancy(piece.color);

    match piece.piece {
        Piece::Pawn => pawn_moves(board, sq, piece.color),
        Piece::Knight => knight_attacks(sq) & !own,
        Piece::Bishop => slide(board, sq, piece.color, &DIAGONAL),
        Piece::Rook => slide(board, sq, piece.color, &ORTHOGONAL),
        Piece::Queen => {
            slide(board, sq, piece.color, &DIAGONAL) | slide(board, sq, piece.color, &ORTHOGONAL)
        }
        Piece::King => king_attacks(sq) & !own,
    }
}

/// Pawn pushes and diagonal captures.
fn pawn_moves(board: &Board, sq: Square, us: Color) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let dir = us.pawn_direction();

    if let Some(one) = sq.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            moves.set(one);

            if sq.rank() == us.pawn_start_rank() {
                if let Some(two) = sq.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        moves.set(two);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(sq, us) {
        if board.piece_at(to).is_some_and(|p| p.color != us) {
            moves.set(to);
        }
    }

    moves
}

/// Slides along each ray until the edge, an own piece (excluded) or an
/// enemy piece (included).
fn slide(board: &Board, sq: Square, us: Color, rays: &[(i8, i8)]) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for &(dr, df) in rays {
        let mut current = sq.offset(dr, df);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => moves.set(to),
                Some(p) => {
                    if p.color != us {
                        moves.set(to);
                    }
                    break;
                }
            }
            current = to.offset(dr, df);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::ColoredPiece;
    use proptest::prelude::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn squares(list: &[&str]) -> Bitboard {
        list.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn initial_position_has_twenty_moves() {
        let board = Board::initial_position();
        assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn initial_pawn_and_knight_moves() {
        let board = Board::initial_position();
        assert_eq!(
            legal_moves(&board, sq("e2"), Color::White),
            squares(&["e3", "e4"])
        );
        assert_eq!(
            legal_moves(&board, sq("g1"), Color::White),
            squares(&["f3", "h3"])
        );
        assert!(legal_moves(&board, sq("d1"), Color::White).is_empty());
        assert!(legal_moves(&board, sq("e1"), Color::White).is_empty());
    }

    #[test]
    fn empty_or_enemy_square_has_no_moves() {
        let board = Board::initial_position();
        assert!(legal_moves(&board, sq("e4"), Color::White).is_empty());
        assert!(legal_moves(&board, sq("e7"), Color::White).is_empty());
        assert!(legal_moves(&board, sq("e2"), Color::Black).is_empty());
    }

    #[test]
    fn pawn_double_push_needs_both_squares_empty() {
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        assert!(legal_moves(&board, sq("e2"), Color::White).is_empty());

        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("e2"), Color::White),
            squares(&["e3"])
        );
    }

    #[test]
    fn pawn_double_push_only_from_start_rank() {
        let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("e3"), Color::White),
            squares(&["e4"])
        );
    }

    #[test]
    fn black_pawn_moves_down() {
        let board = Board::from_fen("4k3/3p4/4P3/8/8/8/8/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("d7"), Color::Black),
            squares(&["d6", "d5", "e6"])
        );
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let board = Board::from_fen("4k3/8/8/2p1P3/3P4/8/8/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("d4"), Color::White),
            squares(&["c5", "d5"])
        );
    }

    #[test]
    fn no_en_passant() {
        // Black just played d7-d5 next to the e5 pawn; no capture onto d6.
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("e5"), Color::White),
            squares(&["e6"])
        );
    }

    #[test]
    fn rook_slides_and_stops() {
        let board = Board::from_fen("4k3/8/8/8/p7/8/8/R3K3").unwrap();
        assert_eq!(
            legal_moves(&board, Square::A1, Color::White),
            squares(&["a2", "a3", "a4", "b1", "c1", "d1"])
        );
    }

    #[test]
    fn bishop_and_queen_rays() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/2B1K3").unwrap();
        assert_eq!(legal_moves(&board, Square::C1, Color::White).count(), 7);

        let board = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3").unwrap();
        // neither king stands on a ray from d4
        assert_eq!(legal_moves(&board, sq("d4"), Color::White).count(), 27);
    }

    #[test]
    fn knight_skips_own_pieces() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3P4/1N2K3").unwrap();
        assert_eq!(
            legal_moves(&board, Square::B1, Color::White),
            squares(&["a3", "c3"])
        );
    }

    #[test]
    fn king_avoids_attacked_squares() {
        // Black rook on the second rank covers d2, e2, f2.
        let board = Board::from_fen("4k3/8/8/8/8/8/7r/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, Square::E1, Color::White),
            squares(&["d1", "f1"])
        );
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3q4/3rK3").unwrap();
        // d1 is defended by the queen on d2; d2 is defended by the rook on d1
        assert!(!legal_moves(&board, Square::E1, Color::White).contains(Square::D1));
        assert!(!legal_moves(&board, Square::E1, Color::White).contains(sq("d2")));
    }

    #[test]
    fn king_cannot_step_along_checking_ray() {
        // Rook on a1 checks the king on e1; f1 stays on the rook's rank.
        let board = Board::from_fen("4k3/8/8/8/8/8/8/r3K3").unwrap();
        let moves = legal_moves(&board, Square::E1, Color::White);
        assert!(!moves.contains(Square::F1));
        assert!(!moves.contains(Square::D1));
        assert_eq!(moves, squares(&["d2", "e2", "f2"]));
    }

    #[test]
    fn pinned_piece_stays_on_pin_line() {
        // Bishop on e2 is pinned by the rook on e8 against the king on e1.
        let board = Board::from_fen("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        assert!(legal_moves(&board, sq("e2"), Color::White).is_empty());

        // A pinned rook may still slide along the pin.
        let board = Board::from_fen("4r2k/8/8/8/8/8/4R3/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("e2"), Color::White),
            squares(&["e3", "e4", "e5", "e6", "e7", "e8"])
        );
    }

    #[test]
    fn check_must_be_answered() {
        // Queen on e5 checks along the e-file; only blocks, captures and king moves remain.
        let board = Board::from_fen("4k3/8/8/4q3/8/8/3N4/R3K3").unwrap();
        let knight = legal_moves(&board, sq("d2"), Color::White);
        assert_eq!(knight, squares(&["e4"]));
        assert!(legal_moves(&board, Square::A1, Color::White).is_empty());
    }

    #[test]
    fn pseudo_legal_ignores_self_check() {
        let board = Board::from_fen("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        assert_eq!(pseudo_legal_moves(&board, sq("e2")).count(), 9);
        assert!(pseudo_legal_moves(&board, sq("e5")).is_empty());
    }

    #[test]
    fn generation_does_not_modify_board() {
        let board = Board::from_fen("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        let before = board;
        let _ = all_legal_moves(&board, Color::White);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_square_is_a_plain_destination() {
        let board = Board::from_fen("k7/4P3/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            legal_moves(&board, sq("e7"), Color::White),
            squares(&["e8"])
        );
        let pawn = board.piece_at(sq("e7"));
        assert_eq!(pawn, Some(ColoredPiece::new(Piece::Pawn, Color::White)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Play random legal moves and check that no generated move ever
        /// leaves the mover in check.
        #[test]
        fn legal_moves_never_leave_king_in_check(choices in prop::collection::vec(any::<u16>(), 1..40)) {
            let mut board = Board::initial_position();
            let mut side = Color::White;

            for choice in choices {
                let moves = all_legal_moves(&board, side);
                for &(from, to) in &moves {
                    prop_assert!(!is_king_in_check(&board.simulate(from, to), side));
                }
                if moves.is_empty() {
                    break;
                }
                let (from, to) = moves[choice as usize % moves.len()];
                board = crate::apply_move(&board, from, to)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?
                    .board;
                prop_assert!(!is_king_in_check(&board, side));
                side = side.opposite();
            }
        }
    }
}
