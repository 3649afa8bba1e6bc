//! Attack detection from raw piece geometry.
//!
//! Nothing in this module calls the legal move generator: the generator's
//! self-check filter depends on these functions, so they only look at
//! occupancy and movement patterns.

use crate::{Bitboard, Board};
use chess_core::{Color, Piece, Square};

/// Knight offsets as (rank delta, file delta).
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King offsets: the eight adjacent squares.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rook rays (ranks and files).
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop rays (diagonals).
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn offsets_from(sq: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(dr, df)| sq.offset(dr, df))
        .collect()
}

/// Returns knight attacks from the given square.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    offsets_from(sq, &KNIGHT_OFFSETS)
}

/// Returns king attacks from the given square.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    offsets_from(sq, &KING_OFFSETS)
}

/// Returns the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    let dir = color.pawn_direction();
    offsets_from(sq, &[(dir, -1), (dir, 1)])
}

/// Walks a ray outward from `sq` and returns the first occupied square on it.
pub(crate) fn first_blocker(board: &Board, sq: Square, (dr, df): (i8, i8)) -> Option<Square> {
    let mut current = sq.offset(dr, df);
    while let Some(target) = current {
        if board.piece_at(target).is_some() {
            return Some(target);
        }
        current = target.offset(dr, df);
    }
    None
}

/// Returns every piece of `by_color` that attacks `sq`.
pub fn attackers_of(board: &Board, sq: Square, by_color: Color) -> Bitboard {
    let mut attackers = Bitboard::EMPTY;

    let holds = |target: Square, piece: Piece| {
        board
            .piece_at(target)
            .is_some_and(|p| p.is(piece, by_color))
    };

    // A pawn attacking sq stands one step behind it, from the attacker's view.
    for target in pawn_attacks(sq, by_color.opposite()) {
        if holds(target, Piece::Pawn) {
            attackers.set(target);
        }
    }

    for target in knight_attacks(sq) {
        if holds(target, Piece::Knight) {
            attackers.set(target);
        }
    }

    for target in king_attacks(sq) {
        if holds(target, Piece::King) {
            attackers.set(target);
        }
    }

    for dir in ORTHOGONAL {
        if let Some(target) = first_blocker(board, sq, dir) {
            if board
                .piece_at(target)
                .is_some_and(|p| p.color == by_color && p.piece.slides_orthogonally())
            {
                attackers.set(target);
            }
        }
    }

    for dir in DIAGONAL {
        if let Some(target) = first_blocker(board, sq, dir) {
            if board
                .piece_at(target)
                .is_some_and(|p| p.color == by_color && p.piece.slides_diagonally())
            {
                attackers.set(target);
            }
        }
    }

    attackers
}

/// Returns true if the given square is attacked by the given color.
pub fn is_square_attacked(board: &Board, sq: Square, by_color: Color) -> bool {
    attackers_of(board, sq, by_color).is_not_empty()
}

/// Returns true if the king of the given color is attacked.
///
/// A board without that king is reported as not in check.
pub fn is_king_in_check(board: &Board, king_color: Color) -> bool {
    match board.find_king(king_color) {
        Some(king_sq) => is_square_attacked(board, king_sq, king_color.opposite()),
        None => false,
    }
}
