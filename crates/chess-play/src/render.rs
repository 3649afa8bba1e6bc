//! Text output for the play session.

use std::io::{self, Write};

use chess_core::{Color, ColoredPiece};
use chess_engine::{Bitboard, Game, MoveRecord};

/// Prints the board (optional), the status line and the capture tallies.
pub fn position(out: &mut impl Write, game: &Game, show_board: bool) -> io::Result<()> {
    if show_board {
        writeln!(out, "{}", game.board())?;
    }
    writeln!(out, "{}", game.status_message())?;
    for color in Color::ALL {
        let lost = game.captured(color);
        if !lost.is_empty() {
            writeln!(out, "{} lost: {}", color, pieces(lost))?;
        }
    }
    Ok(())
}

/// Prints the history one ply per line.
pub fn history(out: &mut impl Write, records: &[MoveRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "no moves yet");
    }
    for (ply, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<8} ({}{})",
            ply + 1,
            record.notation,
            record.from,
            record.to
        )?;
    }
    Ok(())
}

/// Prints a list of destination squares.
pub fn destinations(out: &mut impl Write, moves: Bitboard) -> io::Result<()> {
    if moves.is_empty() {
        return writeln!(out, "no legal moves");
    }
    let squares: Vec<String> = moves.iter().map(|sq| sq.to_algebraic()).collect();
    writeln!(out, "{}", squares.join(" "))
}

fn pieces(list: &[ColoredPiece]) -> String {
    list.iter()
        .map(|p| p.to_fen_char().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
