// Position evaluation function
// Returns a score from White's point of view: positive favors White,
// negative favors Black, regardless of the side to move

use crate::game_repr::{Color, Rules, Type};
use super::piece_square_tables::get_pst_value;

// Material values (pawn = 10)
const PAWN_VALUE: i32 = 10;
const KNIGHT_VALUE: i32 = 30;
const BISHOP_VALUE: i32 = 30;
const ROOK_VALUE: i32 = 50;
const QUEEN_VALUE: i32 = 90;
// Heuristic bias only; a king is never actually captured
const KING_VALUE: i32 = 900;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Evaluate a position: material plus piece-square bonus for every piece.
///
/// Pure function of the board. White pieces add to the score, Black pieces
/// subtract from it.
pub fn evaluate<R: Rules>(pos: &R) -> i32 {
    let mut score = 0;

    for square in 0..64u8 {
        let Some(piece) = pos.piece_at(square) else {
            continue;
        };

        let is_white = piece.color == Color::White;
        let value = piece_value(piece.piece_type) + get_pst_value(piece.piece_type, square, is_white);

        if is_white {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}
