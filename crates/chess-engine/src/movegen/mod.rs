//! Move generation.
//!
//! Generation happens in two stages. [`generate_pseudo_legal`] follows the
//! movement rules of each piece type and ignores king safety.
//! [`generate_moves`] then plays every candidate on a scratch copy of the
//! position and keeps only those that leave the mover's king unattacked.
//!
//! Moves come out in a stable order: the board is scanned row by row from
//! a8 to h1, and each piece contributes its moves as it is found.

mod apply;
mod attacks;
pub mod perft;

use crate::Position;
use chess_core::{Color, Move, Piece, Square};

pub use apply::{apply_move, make_move, play_move};
pub use attacks::{
    is_king_attacked, is_square_attacked, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS,
    QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// What a single step may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Only an empty square.
    Quiet,
    /// Only a square holding an enemy piece.
    Capture,
    /// Either of the above.
    QuietOrCapture,
}

/// The destination filter shared by every generator. Off-board and
/// friendly-occupied squares are always rejected.
fn accepts(position: &Position, to: Square, us: Color, step: Step) -> bool {
    if !to.is_valid() {
        return false;
    }
    match (position.piece_at(to), step) {
        (None, Step::Quiet | Step::QuietOrCapture) => true,
        (Some(target), Step::Capture | Step::QuietOrCapture) => target.color != us,
        _ => false,
    }
}

/// Generates all legal moves for the given position.
pub fn generate_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let mut moves = generate_pseudo_legal(position);

    // Filter out moves that leave king in check
    moves.retain(|&m| {
        let mut scratch = *position;
        apply_move(&mut scratch, m);
        !is_king_attacked(&scratch, us)
    });

    moves
}

/// Resolves a move request against a list of legal moves.
///
/// Origin and destination must match. A request that names a promotion
/// piece only matches that promotion; one that names none takes the first
/// match in generation order, which for a promotion is the queen.
pub fn find_legal(legal_moves: &[Move], request: Move) -> Option<Move> {
    legal_moves.iter().copied().find(|&legal| {
        legal == request
            && (request.promotion().is_none() || request.promotion() == legal.promotion())
    })
}

/// Generates pseudo-legal moves for the side to move.
pub fn generate_pseudo_legal(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let mut moves = Vec::with_capacity(64);

    for (from, piece) in position.board.pieces() {
        if piece.color != us {
            continue;
        }
        match piece.piece {
            Piece::Pawn => generate_pawn_moves(position, from, &mut moves),
            Piece::Knight => generate_step_moves(position, from, &KNIGHT_OFFSETS, &mut moves),
            Piece::Bishop => generate_sliding_moves(position, from, &BISHOP_DIRECTIONS, &mut moves),
            Piece::Rook => generate_sliding_moves(position, from, &ROOK_DIRECTIONS, &mut moves),
            Piece::Queen => generate_sliding_moves(position, from, &QUEEN_DIRECTIONS, &mut moves),
            Piece::King => {
                generate_step_moves(position, from, &KING_OFFSETS, &mut moves);
                generate_castling_moves(position, from, &mut moves);
            }
        }
    }

    moves
}

/// Pushes a pawn move, expanding it into one move per promotion piece when
/// it reaches the last rank.
fn push_pawn_move(from: Square, to: Square, us: Color, moves: &mut Vec<Move>) {
    if to.row == us.promotion_row() {
        for piece in Piece::PROMOTIONS {
            moves.push(Move::with_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

/// Generates pseudo-legal pawn moves.
fn generate_pawn_moves(position: &Position, from: Square, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let dir = us.pawn_direction();

    // Pushes
    let one_step = from.offset(dir, 0);
    if accepts(position, one_step, us, Step::Quiet) {
        push_pawn_move(from, one_step, us, moves);

        let two_steps = from.offset(2 * dir, 0);
        if from.row == us.pawn_start_row() && accepts(position, two_steps, us, Step::Quiet) {
            push_pawn_move(from, two_steps, us, moves);
        }
    }

    // Captures
    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if accepts(position, target, us, Step::Capture) {
            push_pawn_move(from, target, us, moves);
        }
    }

    // En passant onto the empty target square, after the regular captures
    if let Some(target) = position.en_passant {
        if target.row == from.row + dir
            && (target.col - from.col).abs() == 1
            && position.board.is_empty_at(target)
        {
            moves.push(Move::new(from, target));
        }
    }
}

/// Generates single-step moves (knight jumps, king steps).
fn generate_step_moves(
    position: &Position,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let us = position.side_to_move;
    for &(dr, dc) in offsets {
        let to = from.offset(dr, dc);
        if accepts(position, to, us, Step::QuietOrCapture) {
            moves.push(Move::new(from, to));
        }
    }
}

/// Generates ray moves for bishops, rooks and queens.
fn generate_sliding_moves(
    position: &Position,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    let us = position.side_to_move;
    for &(dr, dc) in directions {
        let mut to = from.offset(dr, dc);
        while accepts(position, to, us, Step::QuietOrCapture) {
            moves.push(Move::new(from, to));
            if position.piece_at(to).is_some() {
                break;
            }
            to = to.offset(dr, dc);
        }
    }
}

/// Generates castling moves if the rights, the path and the king's route allow.
///
/// The rook's presence is not checked: the castling rights alone decide.
fn generate_castling_moves(position: &Position, from: Square, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let them = us.opposite();
    let row = us.back_rank();

    if from != Square::new(row, 4) {
        return;
    }

    // Can't castle if in check
    if is_square_attacked(position, from, them) {
        return;
    }

    let empty = |cols: &[i8]| {
        cols.iter()
            .all(|&c| position.board.is_empty_at(Square::new(row, c)))
    };
    let safe = |cols: &[i8]| {
        cols.iter()
            .all(|&c| !is_square_attacked(position, Square::new(row, c), them))
    };

    // Kingside castling
    if position.castling.can_castle_kingside(us) && empty(&[5, 6]) && safe(&[5, 6]) {
        moves.push(Move::new(from, Square::new(row, 6)));
    }

    // Queenside castling
    if position.castling.can_castle_queenside(us) && empty(&[1, 2, 3]) && safe(&[3, 2]) {
        moves.push(Move::new(from, Square::new(row, 2)));
    }
}
