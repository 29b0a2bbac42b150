//! Text rendering and input parsing for the terminal.

use chess_core::{Move, Piece, Square};
use chess_engine::{Board, GameResult};
use std::fmt::Write;

const FILES: &str = "   a  b  c  d  e  f  g  h";

/// Renders the board with rank 8 on top.
///
/// Occupied cells print as `{X}` using the piece letter (uppercase for
/// white). Empty light squares print as `[.]`, empty dark ones as `[ ]`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{FILES}");
    for row in 0..8i8 {
        let rank = 8 - row;
        let _ = write!(out, "{rank} ");
        for col in 0..8i8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    let _ = write!(out, "{{{}}}", piece.to_char());
                }
                None if (row + col) % 2 == 0 => out.push_str("[.]"),
                None => out.push_str("[ ]"),
            }
        }
        let _ = writeln!(out, " {rank}");
    }
    let _ = writeln!(out, "{FILES}");
    out
}

/// Parses a move typed as `e2e4` or `e7e8q`.
pub fn parse_move(input: &str) -> Option<Move> {
    Move::from_uci(&input.trim().to_ascii_lowercase())
}

/// Parses a promotion choice: one of `q`, `r`, `b`, `n`.
pub fn parse_promotion(input: &str) -> Option<Piece> {
    let mut chars = input.trim().chars();
    let choice = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    Piece::from_letter(choice).filter(|piece| Piece::PROMOTIONS.contains(piece))
}

/// Returns true if the input asks to end the session.
pub fn is_exit(input: &str) -> bool {
    matches!(input.trim(), "exit" | "quit")
}

/// Renders the final result between rules.
pub fn result_banner(result: GameResult) -> String {
    let rule = "=========================";
    format!("{rule}\nGame result: {result}\n{rule}\n")
}
