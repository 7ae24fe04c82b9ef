// Minimax Search with Alpha-Beta Pruning
//
// Scores are always from White's point of view, so the search keeps an
// explicit maximizing flag instead of negating scores per ply (negamax).
// White maximizes, Black minimizes.
//
// The deadline is polled once per node. When it has passed the search returns
// `Err(SearchTimeout)`; every move applied on the way down is undone by its
// `Applied` guard as the error propagates back up through `?`.

use crate::game_repr::Rules;
use super::deadline::Deadline;
use super::evaluation::evaluate;
use super::move_ordering::order_moves;
use thiserror::Error;

/// Larger than any score `evaluate` can produce.
pub const SCORE_INF: i32 = 1_000_000;

/// The deadline expired before the search finished.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search deadline exceeded")]
pub struct SearchTimeout;

/// State shared by every frame of one top-level search.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub deadline: Deadline,
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(deadline: Deadline) -> Self {
        Self { deadline, nodes: 0 }
    }
}

/// Minimax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Working copy of the position (moves are applied and undone in place)
/// * `depth` - Remaining search depth in plies (0 = leaf, evaluate)
/// * `alpha` - Best score White can already guarantee
/// * `beta` - Best score Black can already guarantee
/// * `maximizing` - true when White is to move at this node
/// * `ctx` - Deadline and node counter
///
/// # Returns
///
/// The minimax score of `pos` at `depth`, or `SearchTimeout` if the deadline
/// passed. Checkmate and draws are scored by plain evaluation.
pub fn minimax<R: Rules>(
    pos: &mut R,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> Result<i32, SearchTimeout> {
    if ctx.deadline.is_exceeded() {
        return Err(SearchTimeout);
    }
    ctx.nodes += 1;

    if depth == 0 || pos.status().is_terminal() {
        return Ok(evaluate(pos));
    }

    let mut moves = pos.legal_moves();
    if moves.is_empty() {
        return Ok(evaluate(pos));
    }
    order_moves(&mut moves);

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

    for mv in moves {
        let value = {
            let mut child = pos.applied(mv);
            minimax(&mut *child, depth - 1, alpha, beta, !maximizing, ctx)?
        };

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}
