//! Rule set abstraction and game outcomes.
//!
//! This module provides the [`RuleSet`] trait, which bundles the stateless
//! rule queries the [`Game`](crate::Game) driver relies on, together with
//! the types describing how a game stands.

mod standard;

pub use standard::StandardChess;

use crate::movegen::find_legal;
use crate::Position;
use chess_core::{Color, Move};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move is in check and has no legal move.
    Checkmate,
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

/// Whether a game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Over(Outcome),
}

impl GameStatus {
    /// Returns true once the game has ended.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }

    /// Converts the status into a result, given the side to move.
    pub const fn result(self, side_to_move: Color) -> GameResult {
        match self {
            GameStatus::InProgress => GameResult::InProgress,
            GameStatus::Over(Outcome::Stalemate) => GameResult::Draw,
            GameStatus::Over(Outcome::Checkmate) => match side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            },
        }
    }
}

/// Result of a game as reported to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameResult::InProgress => "Game in progress",
            GameResult::WhiteWins => "White wins (checkmate)",
            GameResult::BlackWins => "Black wins (checkmate)",
            GameResult::Draw => "Draw (stalemate)",
        };
        f.write_str(text)
    }
}

/// Stateless rule queries over positions.
///
/// # Example
///
/// ```
/// use chess_engine::{GameStatus, StandardChess};
/// use chess_engine::rules::RuleSet;
///
/// let position = StandardChess.initial_position();
/// let moves = StandardChess.generate_moves(&position);
/// assert_eq!(moves.len(), 20);
/// assert_eq!(StandardChess.status(&position), GameStatus::InProgress);
/// ```
pub trait RuleSet {
    /// Returns the initial position.
    fn initial_position(&self) -> Position;

    /// Generates all legal moves for the given position, in generation order.
    fn generate_moves(&self, position: &Position) -> Vec<Move>;

    /// Returns true if the given move is legal in the position.
    ///
    /// A promotion piece in the request must match, as in
    /// [`try_make_move`](RuleSet::try_make_move).
    fn is_legal(&self, position: &Position, m: Move) -> bool {
        find_legal(&self.generate_moves(position), m).is_some()
    }

    /// Makes a move on the position, returning the new position.
    ///
    /// The move is not validated. Use [`try_make_move`](RuleSet::try_make_move)
    /// for untrusted input.
    fn make_move(&self, position: &Position, m: Move) -> Position;

    /// Attempts to make a move, returning `None` if illegal.
    ///
    /// The fully specified legal move is played, so a request without a
    /// promotion piece promotes to the first generated choice.
    fn try_make_move(&self, position: &Position, m: Move) -> Option<Position> {
        let resolved = find_legal(&self.generate_moves(position), m)?;
        Some(self.make_move(position, resolved))
    }

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Position) -> bool;

    /// Classifies the position given its legal moves.
    fn status_with(&self, position: &Position, legal_moves: &[Move]) -> GameStatus {
        if !legal_moves.is_empty() {
            GameStatus::InProgress
        } else if self.is_check(position) {
            GameStatus::Over(Outcome::Checkmate)
        } else {
            GameStatus::Over(Outcome::Stalemate)
        }
    }

    /// Classifies the position.
    fn status(&self, position: &Position) -> GameStatus {
        self.status_with(position, &self.generate_moves(position))
    }

    /// Returns the game result for the position.
    fn result(&self, position: &Position) -> GameResult {
        self.status(position).result(position.side_to_move)
    }
}
