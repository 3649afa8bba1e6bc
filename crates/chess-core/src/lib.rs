//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the rules engine
//! and its hosts:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - FEN piece-placement parsing

mod color;
mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use piece::{ColoredPiece, Piece};
pub use square::{is_on_board, File, Rank, Square};
