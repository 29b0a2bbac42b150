//! Direction tables and attack detection.

use crate::Position;
use chess_core::{Color, ColoredPiece, Piece, Square};

/// Knight jump offsets as (row, column) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Offsets of the eight squares adjacent to a king.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Orthogonal ray directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight ray directions, diagonals first.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
];

/// Returns the first occupied square along a ray, excluding `from` itself.
fn first_hit(position: &Position, from: Square, (dr, dc): (i8, i8)) -> Option<ColoredPiece> {
    let mut sq = from.offset(dr, dc);
    while sq.is_valid() {
        if let Some(piece) = position.piece_at(sq) {
            return Some(piece);
        }
        sq = sq.offset(dr, dc);
    }
    None
}

/// Returns true if `attacker` stands on any of the given offsets from `sq`.
fn piece_on_offsets(
    position: &Position,
    sq: Square,
    offsets: &[(i8, i8)],
    attacker: ColoredPiece,
) -> bool {
    offsets
        .iter()
        .any(|&(dr, dc)| position.piece_at(sq.offset(dr, dc)) == Some(attacker))
}

/// Returns true if the given square is attacked by the given color.
///
/// The side to move is irrelevant: this asks whether some piece of
/// `by_color` could capture a piece standing on `sq`.
pub fn is_square_attacked(position: &Position, sq: Square, by_color: Color) -> bool {
    // Rook/Queen attacks (orthogonal)
    let orthogonal = ROOK_DIRECTIONS.iter().any(|&dir| {
        matches!(
            first_hit(position, sq, dir),
            Some(ColoredPiece { piece: Piece::Rook | Piece::Queen, color }) if color == by_color
        )
    });
    if orthogonal {
        return true;
    }

    // Bishop/Queen attacks (diagonal)
    let diagonal = BISHOP_DIRECTIONS.iter().any(|&dir| {
        matches!(
            first_hit(position, sq, dir),
            Some(ColoredPiece { piece: Piece::Bishop | Piece::Queen, color }) if color == by_color
        )
    });
    if diagonal {
        return true;
    }

    // Knight attacks
    if piece_on_offsets(
        position,
        sq,
        &KNIGHT_OFFSETS,
        ColoredPiece::new(Piece::Knight, by_color),
    ) {
        return true;
    }

    // Pawn attacks: an attacking pawn stands one row behind `sq` from its
    // own point of view.
    let behind = -by_color.pawn_direction();
    if piece_on_offsets(
        position,
        sq,
        &[(behind, -1), (behind, 1)],
        ColoredPiece::new(Piece::Pawn, by_color),
    ) {
        return true;
    }

    // King attacks
    piece_on_offsets(
        position,
        sq,
        &KING_OFFSETS,
        ColoredPiece::new(Piece::King, by_color),
    )
}

/// Returns true if the king of the given color is in check.
///
/// A position without such a king is reported as not in check.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    match position
        .board
        .find(ColoredPiece::new(Piece::King, king_color))
    {
        Some(king_sq) => is_square_attacked(position, king_sq, king_color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn startpos_attacks() {
        let position = Position::startpos();

        // e3 is covered by the d2 and f2 pawns
        assert!(is_square_attacked(&position, sq("e3"), Color::White));
        // f3 is reached by the g1 knight
        assert!(is_square_attacked(&position, sq("f3"), Color::White));
        // e4 is not attacked at the start
        assert!(!is_square_attacked(&position, sq("e4"), Color::White));
        // e6 is covered by Black only
        assert!(is_square_attacked(&position, sq("e6"), Color::Black));
        assert!(!is_square_attacked(&position, sq("e6"), Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4P3/4RK2 w - - 0 1").unwrap();
        assert!(is_square_attacked(&position, sq("e2"), Color::White));
        assert!(!is_square_attacked(&position, sq("e3"), Color::White));
        assert!(is_square_attacked(&position, sq("a1"), Color::White));
    }

    #[test]
    fn slider_type_must_match_ray() {
        // A bishop on an orthogonal line does not attack along it.
        let position = Position::from_fen("4k3/8/8/8/b3K3/8/8/8 w - - 0 1").unwrap();
        assert!(!is_king_attacked(&position, Color::White));
        // A queen attacks along both kinds of ray.
        let position = Position::from_fen("4k3/8/8/8/q3K3/8/8/8 w - - 0 1").unwrap();
        assert!(is_king_attacked(&position, Color::White));
        let position = Position::from_fen("4k3/8/8/1q6/8/8/4K3/8 w - - 0 1").unwrap();
        assert!(is_king_attacked(&position, Color::White));
    }

    #[test]
    fn pawn_attack_direction_depends_on_attacker() {
        let position = Position::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
        // The black pawn on d5 covers c4 and e4, not c6 or e6.
        assert!(is_square_attacked(&position, sq("c4"), Color::Black));
        assert!(is_square_attacked(&position, sq("e4"), Color::Black));
        assert!(!is_square_attacked(&position, sq("e6"), Color::Black));
        assert!(!is_square_attacked(&position, sq("d4"), Color::Black));

        let position = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(is_square_attacked(&position, sq("e6"), Color::White));
        assert!(!is_square_attacked(&position, sq("e4"), Color::White));
    }

    #[test]
    fn knight_and_king_attacks() {
        let position = Position::from_fen("4k3/8/8/8/8/5n2/8/K7 w - - 0 1").unwrap();
        assert!(is_square_attacked(&position, sq("e1"), Color::Black));
        assert!(is_square_attacked(&position, sq("g5"), Color::Black));
        assert!(!is_square_attacked(&position, sq("f2"), Color::Black));
        // Squares next to the black king
        assert!(is_square_attacked(&position, sq("d7"), Color::Black));
        assert!(is_square_attacked(&position, sq("b2"), Color::White));
    }

    #[test]
    fn is_king_attacked_startpos() {
        let position = Position::startpos();
        assert!(!is_king_attacked(&position, Color::White));
        assert!(!is_king_attacked(&position, Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4R3 w - - 0 1").unwrap();
        assert!(!is_king_attacked(&position, Color::White));
        assert!(is_king_attacked(&position, Color::Black));
    }
}
