//! Game status classification.

use chess_core::Color;
use serde::{Deserialize, Serialize};

use crate::movegen::{is_king_in_check, legal_moves};
use crate::Board;

/// Status of a position for the side to move.
///
/// Always derived from a board and a side; never stored alongside a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Normal,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true once no further move can be played.
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Returns the outcome implied by this status for `side_to_move`, if the
    /// game has ended.
    pub const fn result(self, side_to_move: Color) -> Option<GameResult> {
        match self {
            GameStatus::Checkmate => Some(match side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }),
            GameStatus::Stalemate => Some(GameResult::Draw),
            GameStatus::Normal | GameStatus::Check => None,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// White delivered checkmate.
    WhiteWins,
    /// Black delivered checkmate.
    BlackWins,
    /// Stalemate.
    Draw,
}

impl GameResult {
    /// Returns the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            GameResult::Draw => None,
        }
    }
}

/// Returns true if `side` has at least one legal move.
pub fn has_any_legal_move(board: &Board, side: Color) -> bool {
    board
        .pieces(side)
        .any(|(sq, _)| legal_moves(board, sq, side).is_not_empty())
}

/// Classifies the position for `side_to_move`.
pub fn classify(board: &Board, side_to_move: Color) -> GameStatus {
    let in_check = is_king_in_check(board, side_to_move);
    let can_move = has_any_legal_move(board, side_to_move);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Normal,
    }
}
