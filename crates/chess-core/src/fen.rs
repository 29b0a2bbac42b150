//! FEN (Forsyth-Edwards Notation) parsing for setting up positions.
//!
//! Only reading is supported. The parsed placement uses the board's own
//! orientation: the first FEN rank (rank 8) becomes row 0.

use crate::{Color, ColoredPiece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Cell contents indexed `[row][col]`, row 0 being the eighth rank.
pub type Placement = [[Option<ColoredPiece>; 8]; 8];

/// Parsed FEN data.
///
/// The engine converts this into its own position representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Board contents.
    pub placement: Placement,
    /// Side to move.
    pub active_color: Color,
    /// Castling availability letters in `KQkq` order; empty when "-".
    pub castling: String,
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock (defaults to 0 when the field is omitted).
    pub halfmove_clock: u32,
    /// Fullmove number (defaults to 1 when the field is omitted).
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. The two move counters may be omitted.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Self::parse_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(FenParser {
            placement,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<Placement, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut cells: Placement = [[None; 8]; 8];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = ColoredPiece::from_char(c) {
                    if col < 8 {
                        cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - row,
                    col
                )));
            }
        }

        Ok(cells)
    }

    fn parse_castling(castling: &str) -> Result<String, FenError> {
        if castling == "-" {
            return Ok(String::new());
        }

        let mut letters = String::new();
        for expected in ['K', 'Q', 'k', 'q'] {
            if castling.contains(expected) {
                letters.push(expected);
            }
        }
        if letters.len() != castling.len() {
            return Err(FenError::InvalidCastlingRights(castling.to_string()));
        }

        Ok(letters)
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            // Only the third and sixth ranks can hold an en passant target.
            Some(sq) if sq.row == 5 || sq.row == 2 => Ok(Some(sq)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }

    /// Returns true if the castling field grants the right named by `letter`.
    pub fn grants(&self, letter: char) -> bool {
        self.castling.contains(letter)
    }
}

impl Default for FenParser {
    fn default() -> Self {
        let mut placement: Placement = [[None; 8]; 8];
        let back_rank = "rnbqkbnr";
        for (col, c) in back_rank.chars().enumerate() {
            placement[0][col] = ColoredPiece::from_char(c);
            placement[1][col] = ColoredPiece::from_char('p');
            placement[6][col] = ColoredPiece::from_char('P');
            placement[7][col] = ColoredPiece::from_char(c.to_ascii_uppercase());
        }
        FenParser {
            placement,
            active_color: Color::White,
            castling: "KQkq".to_string(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}
