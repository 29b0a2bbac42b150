//! Chess position representation.

use chess_core::{Color, ColoredPiece, FenError, FenParser, Square};

use crate::Board;

/// Castling rights flags.
///
/// Rights are only ever removed. Nothing in the engine grants a right back
/// once it has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Creates new castling rights from flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        let flag = match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        };
        (self.0 & flag) != 0
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove_kingside(color);
        self.remove_queenside(color);
    }

    /// Removes kingside castling for a color.
    #[inline]
    pub fn remove_kingside(&mut self, color: Color) {
        let mask = match color {
            Color::White => !Self::WHITE_KINGSIDE,
            Color::Black => !Self::BLACK_KINGSIDE,
        };
        self.0 &= mask;
    }

    /// Removes queenside castling for a color.
    #[inline]
    pub fn remove_queenside(&mut self, color: Color) {
        let mask = match color {
            Color::White => !Self::WHITE_QUEENSIDE,
            Color::Black => !Self::BLACK_QUEENSIDE,
        };
        self.0 &= mask;
    }

    /// Clears the right tied to a rook's home square.
    ///
    /// Squares other than a1, h1, a8 and h8 leave the rights untouched.
    pub fn remove_for_rook_square(&mut self, sq: Square) {
        match sq {
            Square::H1 => self.remove_kingside(Color::White),
            Square::A1 => self.remove_queenside(Color::White),
            Square::H8 => self.remove_kingside(Color::Black),
            Square::A8 => self.remove_queenside(Color::Black),
            _ => {}
        }
    }
}

/// Complete chess position state.
///
/// `Position` is a plain `Copy` value. Legality checks work on throwaway
/// copies, so a simulated move can never leak into the live position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Cell contents.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square (if any).
    pub en_passant: Option<Square>,

    /// Plies since the last pawn move or capture. Tracked, never used to end a game.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Position {
    /// Creates an empty position.
    pub const fn empty() -> Self {
        Position {
            board: Board::EMPTY,
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_parsed(FenParser::default())
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        FenParser::parse(fen).map(Self::from_parsed)
    }

    fn from_parsed(parsed: FenParser) -> Self {
        let mut castling = 0u8;
        for (letter, flag) in [
            ('K', CastlingRights::WHITE_KINGSIDE),
            ('Q', CastlingRights::WHITE_QUEENSIDE),
            ('k', CastlingRights::BLACK_KINGSIDE),
            ('q', CastlingRights::BLACK_QUEENSIDE),
        ] {
            if parsed.grants(letter) {
                castling |= flag;
            }
        }

        Position {
            board: Board::from_rows(parsed.placement),
            side_to_move: parsed.active_color,
            castling: CastlingRights::new(castling),
            en_passant: parsed.en_passant,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
        }
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.board.get(sq)
    }

    /// Places a piece on (or clears) a square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, cell: Option<ColoredPiece>) {
        self.board.set(sq, cell);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
