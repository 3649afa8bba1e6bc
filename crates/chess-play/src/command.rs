//! Parsing of the commands typed at the prompt.

use chess_core::Square;
use thiserror::Error;

/// Errors for input lines that are not a valid command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'moves' needs a square, e.g. 'moves e2'")]
    MissingSquare,

    #[error("not a square: {0}")]
    InvalidSquare(String),
}

/// A command read from standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a move in coordinate notation (`e2e4`, `e7e8q`).
    Play(String),
    /// List the legal destinations of the piece on a square.
    Moves(Square),
    /// Print the board.
    Board,
    /// Print the move history.
    History,
    /// Start over from the initial position.
    Reset,
    /// Leave the session.
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line.
    ///
    /// Anything that is not a keyword is taken as a move; the game decides
    /// whether it is well-formed.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        match parts.next().unwrap_or("") {
            "" => Ok(Command::Empty),
            "board" => Ok(Command::Board),
            "history" => Ok(Command::History),
            "reset" => Ok(Command::Reset),
            "quit" | "exit" => Ok(Command::Quit),
            "moves" => {
                let arg = parts.next().ok_or(CommandError::MissingSquare)?;
                Square::from_algebraic(arg)
                    .map(Command::Moves)
                    .ok_or_else(|| CommandError::InvalidSquare(arg.to_string()))
            }
            mv => Ok(Command::Play(mv.to_string())),
        }
    }
}
