//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by row and column.
///
/// Row 0 is the eighth rank and row 7 the first; column 0 is the a-file.
/// Coordinates are signed so that ray casting and offset arithmetic can
/// step off the board. Such squares are ordinary values: check
/// [`Square::is_valid`] before using one to index a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Creates a square from row and column. The result may be off-board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Returns true if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Returns the square displaced by the given row and column deltas.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Iterates over all 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: (b'8' - rank) as i8,
            col: (file - b'a') as i8,
        })
    }

    /// Returns the algebraic notation for this square, or `None` if off-board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }

    // Castling squares
    pub const A1: Square = Square::new(7, 0);
    pub const B1: Square = Square::new(7, 1);
    pub const C1: Square = Square::new(7, 2);
    pub const D1: Square = Square::new(7, 3);
    pub const E1: Square = Square::new(7, 4);
    pub const F1: Square = Square::new(7, 5);
    pub const G1: Square = Square::new(7, 6);
    pub const H1: Square = Square::new(7, 7);
    pub const A8: Square = Square::new(0, 0);
    pub const B8: Square = Square::new(0, 1);
    pub const C8: Square = Square::new(0, 2);
    pub const D8: Square = Square::new(0, 3);
    pub const E8: Square = Square::new(0, 4);
    pub const F8: Square = Square::new(0, 5);
    pub const G8: Square = Square::new(0, 6);
    pub const H8: Square = Square::new(0, 7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "Square({})", name),
            None => write!(f, "Square({}, {})", self.row, self.col),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => f.write_str(&name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e2"), Some(Square::new(6, 4)));
        assert_eq!(Square::from_algebraic("E4"), Some(Square::new(4, 4)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("e22"), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A1.to_algebraic().as_deref(), Some("a1"));
        assert_eq!(Square::H8.to_algebraic().as_deref(), Some("h8"));
        assert_eq!(Square::new(4, 4).to_algebraic().as_deref(), Some("e4"));
        assert_eq!(Square::new(8, 0).to_algebraic(), None);
    }

    #[test]
    fn offsets_may_leave_the_board() {
        let corner = Square::A1;
        assert!(corner.is_valid());
        assert!(!corner.offset(1, 0).is_valid());
        assert!(!corner.offset(0, -1).is_valid());
        assert_eq!(corner.offset(-1, 1), Square::from_algebraic("b2").unwrap());
    }

    #[test]
    fn all_squares_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A8);
        assert_eq!(squares[7], Square::H8);
        assert_eq!(squares[63], Square::H1);
        assert!(squares.iter().all(|sq| sq.is_valid()));
    }

    #[test]
    fn display_off_board() {
        assert_eq!(Square::new(-1, 3).to_string(), "(-1, 3)");
        assert_eq!(Square::E1.to_string(), "e1");
    }
}
