//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling, en passant and underpromotion are not modeled, so only depths
//! where none of them occur match the published tables.

use super::all_legal_moves;
use crate::{apply_move, Board};
use chess_core::Color;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|(from, to)| apply_move(board, from, to).ok())
        .map(|applied| perft(&applied.board, side.opposite(), depth - 1))
        .sum()
}

/// Perft with divide - shows node count for each root move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, side: Color, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = all_legal_moves(board, side)
        .into_iter()
        .filter_map(|(from, to)| {
            let applied = apply_move(board, from, to).ok()?;
            let nodes = if depth > 1 {
                perft(&applied.board, side.opposite(), depth - 1)
            } else {
                1
            };
            Some((format!("{}{}", from, to), nodes))
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
