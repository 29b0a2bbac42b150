//! Standard chess rules implementation.

use super::RuleSet;
use crate::movegen::{self, is_king_attacked};
use crate::Position;
use chess_core::Move;

/// Standard chess rules.
///
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Pawn promotion
/// - Check, checkmate, and stalemate detection
///
/// No draw is declared for repetition, the fifty-move rule or insufficient
/// material; the move counters are tracked but never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        movegen::generate_moves(position)
    }

    fn make_move(&self, position: &Position, m: Move) -> Position {
        movegen::make_move(position, m)
    }

    fn is_check(&self, position: &Position) -> bool {
        is_king_attacked(position, position.side_to_move)
    }
}
