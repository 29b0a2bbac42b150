//! Mailbox board representation.
//!
//! The board is a fixed 8x8 grid of cells, each either empty or holding one
//! [`ColoredPiece`]. Rows run from the eighth rank (row 0) to the first
//! (row 7), columns from the a-file (0) to the h-file (7).

use chess_core::{ColoredPiece, Square};
use std::fmt;

/// An 8x8 grid of cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[Option<ColoredPiece>; 8]; 8]);

impl Board {
    /// A board with every cell empty.
    pub const EMPTY: Board = Board([[None; 8]; 8]);

    /// Creates a board from rows of cells, row 0 being the eighth rank.
    #[inline]
    pub const fn from_rows(rows: [[Option<ColoredPiece>; 8]; 8]) -> Self {
        Board(rows)
    }

    /// Returns the occupant of a square. Off-board squares read as empty.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<ColoredPiece> {
        if sq.is_valid() {
            self.0[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Sets the occupant of a square. Writes to off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<ColoredPiece>) {
        if sq.is_valid() {
            self.0[sq.row as usize][sq.col as usize] = cell;
        }
    }

    /// Empties a square and returns what was on it.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<ColoredPiece> {
        let cell = self.get(sq);
        self.set(sq, None);
        cell
    }

    /// Returns true if the square is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        sq.is_valid() && self.get(sq).is_none()
    }

    /// Finds the first square, in row-major order, holding the given piece.
    pub fn find(&self, piece: ColoredPiece) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Some(piece))
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Returns the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for cell in row {
                let c = cell.map_or('.', ColoredPiece::to_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        write!(f, "{}", self)?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, Piece};

    #[test]
    fn empty_board() {
        let board = Board::EMPTY;
        assert_eq!(board.occupied_count(), 0);
        assert!(board.is_empty_at(Square::E1));
    }

    #[test]
    fn off_board_access() {
        let mut board = Board::EMPTY;
        let off = Square::new(8, 0);
        board.set(off, Some(ColoredPiece::new(Piece::Rook, Color::White)));
        assert_eq!(board.get(off), None);
        assert!(!board.is_empty_at(off));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn set_get_take() {
        let mut board = Board::EMPTY;
        let knight = ColoredPiece::new(Piece::Knight, Color::Black);
        board.set(Square::B8, Some(knight));
        assert_eq!(board.get(Square::B8), Some(knight));
        assert_eq!(board.take(Square::B8), Some(knight));
        assert_eq!(board.get(Square::B8), None);
    }

    #[test]
    fn find_is_row_major() {
        let mut board = Board::EMPTY;
        let rook = ColoredPiece::new(Piece::Rook, Color::White);
        board.set(Square::H1, Some(rook));
        board.set(Square::A8, Some(rook));
        assert_eq!(board.find(rook), Some(Square::A8));
        assert_eq!(
            board.find(ColoredPiece::new(Piece::King, Color::White)),
            None
        );
    }

    #[test]
    fn display() {
        let mut board = Board::EMPTY;
        board.set(Square::E1, Some(ColoredPiece::new(Piece::King, Color::White)));
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "........");
        assert_eq!(lines[7], "....K...");
    }
}
