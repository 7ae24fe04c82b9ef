// Search correctness: alpha-beta against plain minimax, driver scores, and
// apply/undo bookkeeping when the deadline cuts a search short

use crate::agent::ai::deadline::Deadline;
use crate::agent::ai::evaluation::evaluate;
use crate::agent::ai::minimax::{minimax, SearchContext, SearchTimeout, SCORE_INF};
use crate::agent::ai::search::iterative_deepening_search;
use crate::game_repr::{Color, GameStatus, Move, MoveList, Piece, Position, Rules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Full-width minimax without pruning or ordering.
fn reference_minimax(pos: &mut Position, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 || pos.status().is_terminal() {
        return evaluate(pos);
    }

    let mut scores = Vec::new();
    for mv in pos.legal_moves() {
        let mut child = pos.applied(mv);
        scores.push(reference_minimax(&mut *child, depth - 1, !maximizing));
    }

    let best = if maximizing {
        scores.into_iter().max()
    } else {
        scores.into_iter().min()
    };
    best.unwrap_or_else(|| evaluate(pos))
}

/// Play `plies` random moves from the start, stopping early at game end.
fn random_position(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::default();

    for _ in 0..plies {
        let moves = pos.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        pos.apply(mv);
        if pos.status().is_terminal() {
            pos.undo();
            break;
        }
    }

    pos
}

#[test]
fn test_alpha_beta_matches_full_width_minimax() {
    for seed in 0..6 {
        let mut pos = random_position(seed, 10);
        let maximizing = pos.side_to_move().is_maximizing();

        for depth in 1..=3 {
            let expected = reference_minimax(&mut pos, depth, maximizing);
            let mut ctx = SearchContext::new(Deadline::unlimited());
            let actual = minimax(&mut pos, depth, -SCORE_INF, SCORE_INF, maximizing, &mut ctx).unwrap();

            assert_eq!(
                actual, expected,
                "depth {} mismatch in {}",
                depth,
                pos.to_fen()
            );
        }
    }
}

#[test]
fn test_driver_returns_best_fixed_depth_score() {
    for seed in 10..14 {
        let pos = random_position(seed, 8);
        let maximizing = pos.side_to_move().is_maximizing();

        for max_depth in 1..=3u8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = iterative_deepening_search(&pos, max_depth, Deadline::unlimited(), &mut rng);
            assert_eq!(result.depth_reached, max_depth);

            let mut work = pos.clone();
            let child_scores: Vec<(Move, i32)> = pos
                .legal_moves()
                .into_iter()
                .map(|mv| {
                    let mut child = work.applied(mv);
                    (mv, reference_minimax(&mut *child, max_depth - 1, !maximizing))
                })
                .collect();

            let best = if maximizing {
                child_scores.iter().map(|&(_, s)| s).max().unwrap()
            } else {
                child_scores.iter().map(|&(_, s)| s).min().unwrap()
            };
            assert_eq!(result.score, best);

            let chosen = result.best_move.unwrap();
            let chosen_score = child_scores
                .iter()
                .find(|&&(mv, _)| mv == chosen)
                .map(|&(_, s)| s)
                .unwrap();
            assert_eq!(chosen_score, best, "chosen move {} is not optimal", chosen);
        }
    }
}

/// Position wrapper that tracks how many applied moves are outstanding.
/// Clones share the counter, so the search's private copy is observed too.
#[derive(Clone)]
struct CountingPosition {
    inner: Position,
    outstanding: Rc<Cell<i64>>,
}

impl CountingPosition {
    fn new(inner: Position) -> Self {
        Self {
            inner,
            outstanding: Rc::new(Cell::new(0)),
        }
    }
}

impl Rules for CountingPosition {
    fn legal_moves(&self) -> MoveList {
        self.inner.legal_moves()
    }

    fn apply(&mut self, mv: Move) {
        self.outstanding.set(self.outstanding.get() + 1);
        self.inner.apply(mv);
    }

    fn undo(&mut self) {
        self.outstanding.set(self.outstanding.get() - 1);
        self.inner.undo();
    }

    fn status(&self) -> GameStatus {
        self.inner.status()
    }

    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }

    fn piece_at(&self, square: u8) -> Option<Piece> {
        self.inner.piece_at(square)
    }
}

#[test]
fn test_timeout_leaves_apply_undo_balanced() {
    let start = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4").unwrap();
    let mut pos = CountingPosition::new(start.clone());
    let mut ctx = SearchContext::new(Deadline::after(Duration::from_millis(1)));

    // Depth 6 cannot finish in a millisecond
    let result = minimax(&mut pos, 6, -SCORE_INF, SCORE_INF, true, &mut ctx);

    assert_eq!(result, Err(SearchTimeout));
    assert_eq!(pos.outstanding.get(), 0);
    assert_eq!(pos.inner.to_fen(), start.to_fen());
    assert_eq!(pos.inner.plies_played(), 0);
}

#[test]
fn test_driver_timeout_leaves_apply_undo_balanced() {
    let pos = CountingPosition::new(Position::default());
    let mut rng = StdRng::seed_from_u64(5);

    let result = iterative_deepening_search(&pos, 8, Deadline::after(Duration::from_millis(20)), &mut rng);

    assert!(result.depth_reached < 8);
    assert!(pos.legal_moves().contains(&result.best_move.unwrap()));
    assert_eq!(pos.outstanding.get(), 0);
}
