// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the computer opponent: a material plus
// piece-square evaluator, minimax search with alpha-beta pruning driven by
// iterative deepening under a wall-clock deadline, and a five-level
// difficulty policy that decides how much of that machinery a move gets.
//
// Key features:
// - Scores are always from White's point of view
// - Captures and promotions are searched first for better pruning
// - The root move order is shuffled, so equal moves vary from game to game
// - A search that runs out of time still returns a legal move

mod deadline;
mod piece_square_tables;
mod evaluation;
mod move_ordering;
mod minimax;
mod search;
mod difficulty;
mod ai_player;

#[cfg(test)]
mod tests;

pub use ai_player::{AIConfig, AIPlayer};
pub use deadline::{Deadline, Instant};
pub use difficulty::{select_move, select_move_with_rng, Difficulty, Strategy, SEARCH_TIME_BUDGET};
pub use evaluation::{evaluate, piece_value};
pub use minimax::{minimax, SearchContext, SearchTimeout, SCORE_INF};
pub use move_ordering::{order_moves, score_move};
pub use piece_square_tables::get_pst_value;
pub use search::{choose_by_search, iterative_deepening_search, SearchResult};
