// Move ordering: front-load captures and promotions to raise the cutoff rate

use crate::game_repr::Move;
use std::cmp::Reverse;

const CAPTURE_BONUS: i32 = 10;
const PROMOTION_BONUS: i32 = 20;

/// Priority of a move for ordering purposes (higher = searched earlier).
/// A capturing promotion gets both bonuses.
pub fn score_move(mov: &Move) -> i32 {
    let mut score = 0;

    if mov.is_capture() {
        score += CAPTURE_BONUS;
    }
    if mov.is_promotion() {
        score += PROMOTION_BONUS;
    }

    score
}

/// Reorder moves in place, highest priority first.
///
/// The sort is stable, so moves with equal priority keep their input order.
/// Root search relies on that to preserve its shuffled order among quiet moves.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mov| Reverse(score_move(mov)));
}
