//! Move application.
//!
//! [`apply_move`] performs every board-level side effect of a move but leaves
//! the side to move alone, which makes it usable for legality simulation.
//! [`play_move`] and [`make_move`] add the turn change on top.

use crate::Position;
use chess_core::{Color, ColoredPiece, Move, Piece, Square};

/// Applies a move to the position in place, without switching sides.
///
/// The move must come from move generation; nothing is validated here.
/// A move whose origin is empty leaves the position unchanged.
pub fn apply_move(position: &mut Position, m: Move) {
    let from = m.from();
    let to = m.to();

    let Some(moved) = position.piece_at(from) else {
        return;
    };
    let captured = position.piece_at(to);

    // An en passant target lives for exactly one reply.
    let previous_ep = position.en_passant.take();

    position.set_piece(to, Some(moved));
    position.set_piece(from, None);

    match moved.piece {
        Piece::Pawn => {
            if (to.row - from.row).abs() == 2 {
                position.en_passant = Some(Square::new((from.row + to.row) / 2, from.col));
            }
            if previous_ep == Some(to) {
                // The captured pawn sits beside the origin, one row behind `to`.
                let victim = to.offset(-moved.color.pawn_direction(), 0);
                position.set_piece(victim, None);
            }
            if let Some(promoted) = m.promotion() {
                position.set_piece(to, Some(ColoredPiece::new(promoted, moved.color)));
            }
        }
        Piece::King if is_castling(moved.color, from, to) => {
            let home_col = if to.col > from.col { 7 } else { 0 };
            let rook_from = Square::new(from.row, home_col);
            let rook_to = Square::new(from.row, (from.col + to.col) / 2);
            let rook = position.board.take(rook_from);
            position.set_piece(rook_to, rook);
        }
        _ => {}
    }

    // Rights follow the king and the origin square, not the rook itself.
    if moved.piece == Piece::King {
        position.castling.remove_color(moved.color);
    }
    position.castling.remove_for_rook_square(from);

    if moved.piece == Piece::Pawn || captured.is_some() {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock += 1;
    }
}

/// Returns true if a king moving `from` -> `to` is a castling move.
fn is_castling(color: Color, from: Square, to: Square) -> bool {
    from.row == color.back_rank() && to.row == from.row && (to.col - from.col).abs() == 2
}

/// Plays a move in place: applies it, hands the turn over and advances the
/// fullmove number once Black has moved.
pub fn play_move(position: &mut Position, m: Move) {
    apply_move(position, m);
    position.side_to_move = position.side_to_move.opposite();
    if position.side_to_move == Color::White {
        position.fullmove_number += 1;
    }
}

/// Makes a move and returns the new position.
pub fn make_move(position: &Position, m: Move) -> Position {
    let mut new_pos = *position;
    play_move(&mut new_pos, m);
    new_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CastlingRights;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    fn piece(c: char) -> Option<ColoredPiece> {
        ColoredPiece::from_char(c)
    }

    #[test]
    fn pawn_double_push_sets_target() {
        let position = Position::startpos();
        let new_pos = make_move(&position, mv("e2e4"));

        assert_eq!(new_pos.side_to_move, Color::Black);
        assert_eq!(new_pos.piece_at(sq("e4")), piece('P'));
        assert_eq!(new_pos.piece_at(sq("e2")), None);
        assert_eq!(new_pos.en_passant, Some(sq("e3")));
        assert_eq!(new_pos.halfmove_clock, 0);
        assert_eq!(new_pos.fullmove_number, 1);
    }

    #[test]
    fn en_passant_target_expires() {
        let position = make_move(&Position::startpos(), mv("e2e4"));
        let new_pos = make_move(&position, mv("g8f6"));
        assert_eq!(new_pos.en_passant, None);
        assert_eq!(new_pos.fullmove_number, 2);
        assert_eq!(new_pos.halfmove_clock, 1);
    }

    #[test]
    fn apply_does_not_switch_sides() {
        let mut position = Position::startpos();
        apply_move(&mut position, mv("g1f3"));
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(position.piece_at(sq("f3")), piece('N'));
    }

    #[test]
    fn capture_resets_halfmove_clock() {
        let position =
            Position::from_fen("4k3/8/8/3p4/8/8/8/3QK3 w - - 7 20").unwrap();
        let new_pos = make_move(&position, mv("d1d5"));
        assert_eq!(new_pos.piece_at(sq("d5")), piece('Q'));
        assert_eq!(new_pos.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_capture_removes_pawn() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let new_pos = make_move(&position, mv("e5d6"));
        assert_eq!(new_pos.piece_at(sq("d6")), piece('P'));
        assert_eq!(new_pos.piece_at(sq("d5")), None);
        assert_eq!(new_pos.piece_at(sq("e5")), None);
        assert_eq!(new_pos.board.occupied_count(), 3);
    }

    #[test]
    fn black_en_passant_capture() {
        let position =
            Position::from_fen("4k3/8/8/8/4Pp2/8/8/4K3 b - e3 0 1").unwrap();
        let new_pos = make_move(&position, mv("f4e3"));
        assert_eq!(new_pos.piece_at(sq("e3")), piece('p'));
        assert_eq!(new_pos.piece_at(sq("e4")), None);
        assert_eq!(new_pos.fullmove_number, 2);
    }

    #[test]
    fn promotion_replaces_pawn() {
        let position = Position::from_fen("8/P7/8/8/8/8/8/4K2k w - - 0 1").unwrap();
        let new_pos = make_move(
            &position,
            Move::with_promotion(sq("a7"), sq("a8"), Piece::Knight),
        );
        assert_eq!(new_pos.piece_at(sq("a8")), piece('N'));
        assert_eq!(new_pos.piece_at(sq("a7")), None);
    }

    #[test]
    fn castling_moves_the_rook() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();

        let kingside = make_move(&position, mv("e1g1"));
        assert_eq!(kingside.piece_at(sq("g1")), piece('K'));
        assert_eq!(kingside.piece_at(sq("f1")), piece('R'));
        assert_eq!(kingside.piece_at(sq("h1")), None);
        assert!(!kingside.castling.can_castle_kingside(Color::White));
        assert!(!kingside.castling.can_castle_queenside(Color::White));
        assert!(kingside.castling.can_castle_kingside(Color::Black));

        let queenside = make_move(&kingside, mv("e8c8"));
        assert_eq!(queenside.piece_at(sq("c8")), piece('k'));
        assert_eq!(queenside.piece_at(sq("d8")), piece('r'));
        assert_eq!(queenside.piece_at(sq("a8")), None);
        assert_eq!(queenside.castling, CastlingRights::NONE);
    }

    #[test]
    fn rook_move_clears_one_right() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let new_pos = make_move(&position, mv("a1a5"));
        assert!(!new_pos.castling.can_castle_queenside(Color::White));
        assert!(new_pos.castling.can_castle_kingside(Color::White));
        assert_eq!(new_pos.halfmove_clock, 1);
    }

    #[test]
    fn rights_follow_origin_square_not_piece() {
        // A knight leaving h1 still revokes White's kingside right.
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/4K2N w K - 0 1").unwrap();
        let new_pos = make_move(&position, mv("h1g3"));
        assert!(!new_pos.castling.can_castle_kingside(Color::White));
    }

    #[test]
    fn capturing_a_rook_keeps_its_right() {
        let position =
            Position::from_fen("r3k3/8/8/8/8/8/8/Q3K3 w q - 0 1").unwrap();
        let new_pos = make_move(&position, mv("a1a8"));
        assert!(new_pos.castling.can_castle_queenside(Color::Black));
    }

    #[test]
    fn castling_after_rook_was_captured() {
        let mut position =
            Position::from_fen("4k3/8/8/8/4b3/8/P7/4K2R b K - 0 1").unwrap();
        for uci in ["e4h1", "a2a3", "h1d5"] {
            position = make_move(&position, mv(uci));
        }
        assert!(position.castling.can_castle_kingside(Color::White));

        let castle = mv("e1g1");
        assert!(crate::movegen::generate_moves(&position).contains(&castle));

        let new_pos = make_move(&position, castle);
        assert_eq!(new_pos.piece_at(sq("g1")), piece('K'));
        assert_eq!(new_pos.piece_at(sq("e1")), None);
        assert_eq!(new_pos.piece_at(sq("f1")), None);
        assert_eq!(new_pos.piece_at(sq("h1")), None);
        assert!(!new_pos.castling.can_castle_kingside(Color::White));
    }

    #[test]
    fn empty_origin_is_ignored() {
        let position = Position::startpos();
        let new_pos = {
            let mut p = position;
            apply_move(&mut p, mv("e4e5"));
            p
        };
        assert_eq!(new_pos, position);
    }
}
