//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - an immutable 8x8 board value; every change returns a new board
//! - Legal move generation with self-check filtering ([`legal_moves`])
//! - Attack detection ([`is_square_attacked`], [`is_king_in_check`])
//! - Position classification into [`GameStatus`]
//! - Move application with promotion and notation ([`apply_move`])
//! - [`Game`] - a session with history and captured pieces
//! - [`RuleSet`] - trait for plugging in rule variants
//!
//! # Architecture
//!
//! The board is a mailbox of 64 optional pieces. Square sets, such as the
//! destinations of a piece, are returned as a [`Bitboard`]. Attack detection
//! only reads piece geometry, so it never calls back into move generation.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{apply_move, classify, legal_moves, Board, Game, GameStatus};
//!
//! // Stateless: boards in, boards out
//! let board = Board::initial_position();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(legal_moves(&board, e2, Color::White).contains(e4));
//!
//! let applied = apply_move(&board, e2, e4).unwrap();
//! assert_eq!(applied.notation, "e4");
//! assert_eq!(classify(&applied.board, Color::Black), GameStatus::Normal);
//!
//! // A game session
//! let mut game = Game::new();
//! game.play_uci("e2e4").unwrap();
//! game.play_uci("e7e5").unwrap();
//! assert_eq!(game.status_message(), "White's turn");
//! ```

mod apply;
mod bitboard;
mod board;
mod game;
pub mod movegen;
pub mod notation;
pub mod rules;
mod status;

pub use apply::{apply_move, AppliedMove, ApplyError};
pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{Game, GameError, MoveRecord};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    all_legal_moves, attackers_of, is_king_in_check, is_square_attacked, king_attacks,
    knight_attacks, legal_moves, pawn_attacks, pseudo_legal_moves,
};
pub use rules::{RuleSet, StandardChess};
pub use status::{classify, has_any_legal_move, GameResult, GameStatus};
