//! Move application.

use chess_core::{ColoredPiece, Piece, Square};
use thiserror::Error;

use crate::notation::notation_for;
use crate::Board;

/// Error returned when a move cannot be applied at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("no piece on {0}")]
    EmptySource(Square),
}

/// The outcome of applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// The board after the move.
    pub board: Board,
    /// Whatever stood on the destination before the move.
    pub captured: Option<ColoredPiece>,
    /// Algebraic notation for the move, with check and mate suffixes.
    pub notation: String,
}

/// Moves the piece on `from` to `to` and returns the resulting board.
///
/// This does not check legality: callers validate against
/// [`legal_moves`](crate::legal_moves) first. The moved piece is flagged as
/// moved, and a pawn reaching its promotion rank becomes a queen. The input
/// board is never modified.
///
/// # Errors
///
/// Returns [`ApplyError::EmptySource`] if `from` is empty.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Result<AppliedMove, ApplyError> {
    let mover = board.piece_at(from).ok_or(ApplyError::EmptySource(from))?;
    let captured = board.piece_at(to);

    let mut placed = mover.moved();
    if placed.piece == Piece::Pawn && to.rank() == placed.color.promotion_rank() {
        placed = placed.promoted_to(Piece::Queen);
    }

    let next = board.without_piece(from).with_piece(to, placed);
    let notation = notation_for(mover, captured.is_some(), from, to, &next);

    Ok(AppliedMove {
        board: next,
        captured,
        notation,
    })
}
