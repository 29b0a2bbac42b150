//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 mailbox of optional pieces
//! - [`Position`] - Full game state including castling rights and en passant
//! - [`Game`] - Stateful driver that validates and applies submitted moves
//! - [`RuleSet`] - Stateless rule queries, implemented by [`StandardChess`]
//! - Move generation, attack detection and perft in [`movegen`]
//!
//! # Example
//!
//! ```
//! use chess_core::Move;
//! use chess_engine::{Game, GameResult};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.submit(Move::from_uci(uci).unwrap()).unwrap();
//! }
//! assert_eq!(game.result(), GameResult::BlackWins);
//! ```

mod board;
mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use movegen::{
    apply_move, find_legal, generate_moves, generate_pseudo_legal, is_king_attacked,
    is_square_attacked, make_move, play_move,
};
pub use position::{CastlingRights, Position};
pub use rules::{GameResult, GameStatus, Outcome, RuleSet, StandardChess};
