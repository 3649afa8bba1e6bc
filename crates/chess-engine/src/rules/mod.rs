//! Rule set abstraction.
//!
//! [`RuleSet`] bundles the operations a game session needs from the rules:
//! the starting layout, legal destinations, move application and position
//! classification. [`Game`](crate::Game) is generic over it, so a variant
//! only has to swap the implementation.

mod standard;

pub use standard::StandardChess;

use crate::{AppliedMove, ApplyError, Bitboard, Board, GameStatus};
use chess_core::{Color, Square};

/// Trait for implementing chess rule variants.
///
/// # Example
///
/// ```
/// use chess_engine::rules::RuleSet;
/// use chess_engine::StandardChess;
/// use chess_core::{Color, Square};
///
/// let board = StandardChess.initial_position();
/// let e2 = Square::from_algebraic("e2").unwrap();
/// assert_eq!(StandardChess.legal_moves(&board, e2, Color::White).count(), 2);
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_position(&self) -> Board;

    /// Returns the legal destinations for the piece on `from`.
    fn legal_moves(&self, board: &Board, from: Square, side_to_move: Color) -> Bitboard;

    /// Applies a move without checking legality.
    fn apply_move(&self, board: &Board, from: Square, to: Square) -> Result<AppliedMove, ApplyError>;

    /// Classifies the position for `side_to_move`.
    fn classify(&self, board: &Board, side_to_move: Color) -> GameStatus;

    /// Returns true if moving `from` to `to` is legal for `side_to_move`.
    fn is_legal(&self, board: &Board, from: Square, to: Square, side_to_move: Color) -> bool {
        self.legal_moves(board, from, side_to_move).contains(to)
    }
}
