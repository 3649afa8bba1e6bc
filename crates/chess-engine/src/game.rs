//! Game session with move history.
//!
//! [`Game`] owns the current board, the side to move, the list of played
//! moves and the pieces each side has lost. Status is never cached: it is
//! recomputed from the board whenever it is asked for.

use chess_core::{Color, ColoredPiece, FenError, FenParser, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::{RuleSet, StandardChess};
use crate::{ApplyError, Bitboard, Board, GameResult, GameStatus};

/// A move that was played, as recorded in the game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` before moving.
    pub piece: ColoredPiece,
    pub captured: Option<ColoredPiece>,
    pub notation: String,
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is over: {0:?}")]
    GameOver(GameStatus),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {0} belongs to the other side")]
    NotYourPiece(Square),

    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("invalid coordinate move: {0}")]
    InvalidUci(String),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Game<R = StandardChess> {
    rules: R,
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    captured: [Vec<ColoredPiece>; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_rules(StandardChess)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self::from_board_with_rules(StandardChess, board, side_to_move)
    }

    /// Creates a game from a FEN string.
    ///
    /// The active color field picks the side to move; White if it is absent.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_board(
            Board::from_placement(&parsed),
            parsed.active_color,
        ))
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game under the given rules.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_position();
        Self::from_board_with_rules(rules, board, Color::White)
    }

    /// Creates a game under the given rules from an arbitrary board.
    pub fn from_board_with_rules(rules: R, board: Board, side_to_move: Color) -> Self {
        Game {
            rules,
            board,
            side_to_move,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Returns to the starting position and forgets all moves and captures.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_position();
        self.side_to_move = Color::White;
        self.history.clear();
        self.captured.iter_mut().for_each(Vec::clear);
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the status of the current position.
    pub fn status(&self) -> GameStatus {
        self.rules.classify(&self.board, self.side_to_move)
    }

    /// Returns the outcome, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.status().result(self.side_to_move)
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the pieces of `color` that have been captured.
    pub fn captured(&self, color: Color) -> &[ColoredPiece] {
        &self.captured[color.index()]
    }

    /// Returns the legal destinations for the piece on `from`.
    ///
    /// Empty unless `from` holds a piece of the side to move.
    pub fn legal_moves(&self, from: Square) -> Bitboard {
        self.rules.legal_moves(&self.board, from, self.side_to_move)
    }

    /// Returns the current placement and side to move as a FEN prefix.
    pub fn to_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.board.to_fen(), side)
    }

    /// Plays a move for the side to move.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the game is over, `from` does not
    /// hold a piece of the side to move, or `to` is not a legal destination.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&MoveRecord, GameError> {
        let status = self.status();
        if status.is_game_over() {
            return Err(GameError::GameOver(status));
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(GameError::NotYourPiece(from));
        }
        if !self.legal_moves(from).contains(to) {
            return Err(GameError::IllegalMove { from, to });
        }

        let applied = self.rules.apply_move(&self.board, from, to)?;
        if let Some(victim) = applied.captured {
            self.captured[victim.color.index()].push(victim);
        }

        self.board = applied.board;
        self.side_to_move = self.side_to_move.opposite();
        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured: applied.captured,
            notation: applied.notation,
        });

        let record = self.history.len() - 1;
        Ok(&self.history[record])
    }

    /// Plays a move in coordinate notation such as `e2e4`.
    ///
    /// A trailing promotion letter is accepted only if it is `q`, since pawns
    /// always promote to a queen.
    pub fn play_uci(&mut self, uci: &str) -> Result<&MoveRecord, GameError> {
        let (from, to) = parse_coordinates(uci).ok_or_else(|| GameError::InvalidUci(uci.to_string()))?;
        self.play(from, to)
    }

    /// Returns a one-line description of the position for display.
    pub fn status_message(&self) -> String {
        let side = self.side_to_move;
        match self.status() {
            GameStatus::Normal => format!("{side}'s turn"),
            GameStatus::Check => format!("{side} is in check!"),
            GameStatus::Checkmate => format!("Checkmate! {} wins!", side.opposite()),
            GameStatus::Stalemate => "Stalemate! The game is a draw.".to_string(),
        }
    }
}

fn parse_coordinates(uci: &str) -> Option<(Square, Square)> {
    let uci = uci.trim();
    if !uci.is_ascii() {
        return None;
    }
    let from = Square::from_algebraic(uci.get(0..2)?)?;
    let to = Square::from_algebraic(uci.get(2..4)?)?;
    match uci.get(4..)? {
        "" | "q" | "Q" => Some((from, to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Piece;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn play_all(game: &mut Game, moves: &[&str]) {
        for m in moves {
            game.play_uci(m).unwrap();
        }
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::Normal);
        assert!(game.history().is_empty());
        assert_eq!(game.result(), None);
        assert_eq!(game.status_message(), "White's turn");
    }

    #[test]
    fn play_records_and_switches_side() {
        let mut game = Game::new();
        let record = game.play(sq("e2"), sq("e4")).unwrap();
        assert_eq!(record.notation, "e4");
        assert!(record.piece.is(Piece::Pawn, Color::White));
        assert_eq!(record.captured, None);

        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status_message(), "Black's turn");
    }

    #[test]
    fn illegal_move_leaves_game_untouched() {
        let mut game = Game::new();
        let before = *game.board();
        assert_eq!(
            game.play(sq("e2"), sq("e5")),
            Err(GameError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn bad_sources_are_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.play(sq("e4"), sq("e5")),
            Err(GameError::EmptySquare(sq("e4")))
        );
        assert_eq!(
            game.play(sq("e7"), sq("e5")),
            Err(GameError::NotYourPiece(sq("e7")))
        );
    }

    #[test]
    fn legal_moves_only_for_side_to_move() {
        let game = Game::new();
        assert_eq!(game.legal_moves(sq("e2")).count(), 2);
        assert!(game.legal_moves(sq("e7")).is_empty());
        assert!(game.legal_moves(sq("e4")).is_empty());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        assert_eq!(game.history()[3].notation, "Qdh4#");
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.result(), Some(GameResult::BlackWins));
        assert_eq!(game.status_message(), "Checkmate! Black wins!");
        assert_eq!(
            game.play_uci("a2a3"),
            Err(GameError::GameOver(GameStatus::Checkmate))
        );
    }

    #[test]
    fn check_message() {
        let game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 b").unwrap();
        assert_eq!(game.status(), GameStatus::Check);
        assert_eq!(game.status_message(), "Black is in check!");
    }

    #[test]
    fn stalemate_from_fen() {
        let mut game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.result(), Some(GameResult::Draw));
        assert_eq!(game.status_message(), "Stalemate! The game is a draw.");
        assert!(matches!(
            game.play_uci("h8h7"),
            Err(GameError::GameOver(GameStatus::Stalemate))
        ));
    }

    #[test]
    fn captures_are_tallied_by_victim_color() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "d7d5", "e4d5", "d8d5"]);

        assert_eq!(game.history()[2].notation, "exd5");
        assert_eq!(game.history()[3].notation, "Qdxd5");
        assert_eq!(game.captured(Color::Black).len(), 1);
        assert_eq!(game.captured(Color::White).len(), 1);
        assert!(game.captured(Color::White)[0].is(Piece::Pawn, Color::White));
    }

    #[test]
    fn reset_restores_the_start() {
        let mut game = Game::new();
        play_all(&mut game, &["e2e4", "d7d5", "e4d5"]);
        game.reset();

        assert_eq!(*game.board(), Board::initial_position());
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert!(game.captured(Color::Black).is_empty());
    }

    #[test]
    fn coordinate_parsing() {
        let mut game = Game::from_fen("k7/4P3/8/8/8/8/8/4K3 w").unwrap();
        assert!(matches!(game.play_uci("e7e8n"), Err(GameError::InvalidUci(_))));
        assert!(matches!(game.play_uci("e7"), Err(GameError::InvalidUci(_))));
        assert!(matches!(game.play_uci("z9e8"), Err(GameError::InvalidUci(_))));

        let record = game.play_uci("e7e8q").unwrap();
        assert_eq!(record.notation, "e8=Q+");
        assert!(game.board().piece_at(sq("e8")).unwrap().is(Piece::Queen, Color::White));
    }

    #[test]
    fn fen_round_trip() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
        assert!(Game::from_fen("not/a/fen").is_err());
    }

    #[test]
    fn history_serializes() {
        let mut game = Game::new();
        game.play_uci("g1f3").unwrap();
        let json = serde_json::to_string(game.history()).unwrap();
        assert!(json.contains("\"from\":\"g1\""));
        assert!(json.contains("\"notation\":\"Ngf3\""));

        let back: Vec<MoveRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game.history());
    }
}
