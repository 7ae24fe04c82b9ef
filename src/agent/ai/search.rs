// Iterative Deepening Search Orchestrator
//
// This module implements iterative deepening search for move selection.
// It searches depths 1, 2, 3, ... up to max_depth against one shared deadline
// and keeps the result of the deepest pass that finished. A pass cut short by
// the deadline is thrown away.

use crate::game_repr::{Move, MoveList, Rules};
use super::deadline::{Deadline, Instant};
use super::minimax::{minimax, SearchContext, SearchTimeout, SCORE_INF};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    /// Deepest fully completed depth (0 if none completed)
    pub depth_reached: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth_reached: 0,
            nodes_searched: 0,
            time_ms: 0,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Position to search; a private copy is searched, `pos` is untouched
/// * `max_depth` - Maximum search depth in plies (at least 1 is searched)
/// * `deadline` - Shared deadline for every depth
/// * `rng` - Shuffles root moves so equal-scoring moves vary between games
///
/// # Returns
/// SearchResult for the last completed depth. If not even depth 1 completed,
/// `best_move` is a uniformly random legal move and `depth_reached` is 0.
/// `best_move` is `None` only when there are no legal moves.
pub fn iterative_deepening_search<R, G>(
    pos: &R,
    max_depth: u8,
    deadline: Deadline,
    rng: &mut G,
) -> SearchResult
where
    R: Rules,
    G: Rng + ?Sized,
{
    let start_time = Instant::now();
    let mut best_result = SearchResult::new();

    // Search mutates its own copy; the caller's position is never touched
    let mut search_pos = pos.clone();
    let mut ctx = SearchContext::new(deadline);

    let mut root_moves = search_pos.legal_moves();
    if root_moves.is_empty() {
        return best_result;
    }
    root_moves.shuffle(rng);

    let maximizing = search_pos.side_to_move().is_maximizing();
    let max_depth = max_depth.max(1);

    for depth in 1..=max_depth {
        match search_root(&mut search_pos, &root_moves, depth, maximizing, &mut ctx) {
            Ok((best_move, score)) => {
                best_result.best_move = best_move;
                best_result.score = score;
                best_result.depth_reached = depth;
                best_result.nodes_searched = ctx.nodes;
                best_result.time_ms = elapsed_ms(&start_time);
                print_search_info(depth, &best_result);
            }
            Err(SearchTimeout) => {
                debug!(
                    "depth {} abandoned at deadline after {} nodes",
                    depth, ctx.nodes
                );
                break;
            }
        }
    }

    if best_result.best_move.is_none() {
        warn!("no search depth completed before the deadline, playing a random move");
        best_result.best_move = root_moves.choose(rng).copied();
        best_result.nodes_searched = ctx.nodes;
        best_result.time_ms = elapsed_ms(&start_time);
    }

    best_result
}

/// Search every root move to `depth` plies and return the best one for the
/// side to move. The first move in root order wins ties.
fn search_root<R: Rules>(
    pos: &mut R,
    root_moves: &MoveList,
    depth: u8,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> Result<(Option<Move>, i32), SearchTimeout> {
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for &mv in root_moves {
        let score = {
            let mut child = pos.applied(mv);
            minimax(&mut *child, depth - 1, -SCORE_INF, SCORE_INF, !maximizing, ctx)?
        };

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    Ok((best_move, best_score))
}

/// Convenience wrapper: search with a time budget starting now and return
/// only the chosen move.
pub fn choose_by_search<R, G>(
    pos: &R,
    max_depth: u8,
    time_budget: Duration,
    rng: &mut G,
) -> Option<Move>
where
    R: Rules,
    G: Rng + ?Sized,
{
    iterative_deepening_search(pos, max_depth, Deadline::after(time_budget), rng).best_move
}

fn elapsed_ms(start_time: &Instant) -> u64 {
    start_time.elapsed().as_millis() as u64
}

/// Log search information for a completed depth
fn print_search_info(depth: u8, result: &SearchResult) {
    let nps = if result.time_ms > 0 {
        (result.nodes_searched as f64 / result.time_ms as f64 * 1000.0) as u64
    } else {
        result.nodes_searched
    };

    debug!(
        "info depth {} score {} nodes {} time {} nps {} pv {}",
        depth,
        result.score,
        result.nodes_searched,
        result.time_ms,
        nps,
        result
            .best_move
            .map(|mv| mv.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_search_starting_position() {
        let pos = Position::default();
        let mut rng = StdRng::seed_from_u64(7);
        let result = iterative_deepening_search(&pos, 3, Deadline::unlimited(), &mut rng);

        assert!(result.best_move.is_some());
        assert_eq!(result.depth_reached, 3);
        assert!(result.nodes_searched > 0);
    }

    #[test]
    fn test_search_no_legal_moves() {
        let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/K7 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let result = iterative_deepening_search(&pos, 3, Deadline::unlimited(), &mut rng);

        assert_eq!(result, SearchResult::new());
    }

    #[test]
    fn test_expired_deadline_falls_back_to_legal_move() {
        let pos = Position::default();
        let legal = pos.legal_moves();
        let mut rng = StdRng::seed_from_u64(7);
        let result = iterative_deepening_search(&pos, 4, Deadline::at(Instant::now()), &mut rng);

        assert_eq!(result.depth_reached, 0);
        assert!(legal.contains(&result.best_move.unwrap()));
    }

    #[test]
    fn test_same_seed_same_move() {
        let pos = Position::default();
        let first = iterative_deepening_search(&pos, 2, Deadline::unlimited(), &mut StdRng::seed_from_u64(42));
        let second = iterative_deepening_search(&pos, 2, Deadline::unlimited(), &mut StdRng::seed_from_u64(42));

        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }

    #[test]
    fn test_black_minimizes_at_root() {
        // Black to move can take a free white queen on d4
        let pos = Position::from_fen("3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let result = iterative_deepening_search(&pos, 1, Deadline::unlimited(), &mut rng);

        let best = result.best_move.unwrap();
        assert_eq!(best.to_string(), "d8d4");
        assert!(result.score < 0, "Black is better after winning the queen");
    }
}
