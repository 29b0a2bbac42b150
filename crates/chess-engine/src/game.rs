//! Stateful game driver.
//!
//! [`Game`] owns the live [`Position`] and a cache of the legal moves for
//! it. The cache is filled on first use and dropped by every applied move,
//! so callers can query moves, status and result repeatedly at the cost of
//! one generation per turn.

use crate::movegen::{find_legal, play_move};
use crate::rules::{GameResult, GameStatus, RuleSet, StandardChess};
use crate::Position;
use chess_core::{Color, FenError, Move};
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// Legal moves for the current position, or a marker that they must be
/// generated again.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MoveCache {
    Fresh(Vec<Move>),
    Stale,
}

impl MoveCache {
    /// Returns the cached moves, generating them first if stale.
    fn moves(&mut self, position: &Position) -> &[Move] {
        match self {
            MoveCache::Fresh(moves) => moves,
            MoveCache::Stale => {
                let moves = StandardChess.generate_moves(position);
                trace!(count = moves.len(), "generated legal moves");
                *self = MoveCache::Fresh(moves);
                self.moves(position)
            }
        }
    }
}

/// A chess game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Legal moves for `position`.
    cache: MoveCache,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(StandardChess.initial_position())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            cache: MoveCache::Stale,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns a snapshot of the current position.
    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns all legal moves in the current position, in generation order.
    ///
    /// An empty slice means the game is over.
    pub fn legal_moves(&mut self) -> &[Move] {
        self.cache.moves(&self.position)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        StandardChess.is_check(&self.position)
    }

    /// Returns whether the game is still running, and how it ended if not.
    pub fn status(&mut self) -> GameStatus {
        let moves = self.cache.moves(&self.position);
        StandardChess.status_with(&self.position, moves)
    }

    /// Returns true if the game has ended.
    pub fn is_over(&mut self) -> bool {
        self.status().is_over()
    }

    /// Returns the game result.
    pub fn result(&mut self) -> GameResult {
        let side_to_move = self.position.side_to_move;
        self.status().result(side_to_move)
    }

    /// Plays a move for the side to move.
    ///
    /// The request must match one of [`legal_moves`](Game::legal_moves).
    /// A request without a promotion piece is resolved to the first
    /// matching legal move, and the move actually played is returned.
    /// On error the game is left untouched.
    pub fn submit(&mut self, request: Move) -> Result<Move, GameError> {
        if self.is_over() {
            debug!(%request, "move submitted after the game ended");
            return Err(GameError::GameAlreadyOver);
        }

        let Some(legal) = find_legal(self.legal_moves(), request) else {
            debug!(%request, "rejected illegal move");
            return Err(GameError::IllegalMove(request));
        };

        play_move(&mut self.position, legal);
        self.cache = MoveCache::Stale;
        debug!(mv = %legal, next = %self.position.side_to_move, "applied move");

        if let GameStatus::Over(outcome) = self.status() {
            debug!(?outcome, result = %self.result(), "game over");
        }

        Ok(legal)
    }
}
