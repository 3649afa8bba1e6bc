//! Standard chess rules.

use super::RuleSet;
use crate::{movegen, status, AppliedMove, ApplyError, Bitboard, Board, GameStatus};
use chess_core::{Color, Square};

/// Standard piece movement with check, checkmate and stalemate detection.
///
/// Castling, en passant, underpromotion and the draw rules (fifty moves,
/// repetition, insufficient material) are not part of this rule set.
/// Pawns always promote to a queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Board {
        Board::initial_position()
    }

    fn legal_moves(&self, board: &Board, from: Square, side_to_move: Color) -> Bitboard {
        movegen::legal_moves(board, from, side_to_move)
    }

    fn apply_move(&self, board: &Board, from: Square, to: Square) -> Result<AppliedMove, ApplyError> {
        crate::apply_move(board, from, to)
    }

    fn classify(&self, board: &Board, side_to_move: Color) -> GameStatus {
        status::classify(board, side_to_move)
    }
}
