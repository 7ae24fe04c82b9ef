//! Difficulty policy: maps a difficulty level to a move-selection strategy.
//!
//! The table in [`Difficulty::strategy`] is the only place where levels are
//! tied to behaviour:
//!
//! | Level | Name         | Strategy                                  |
//! |-------|--------------|-------------------------------------------|
//! | 1     | Beginner     | uniform random legal move                 |
//! | 2     | Intermediate | random capture, else random legal move    |
//! | 3     | Advanced     | iterative deepening to depth 2, 2 s       |
//! | 4     | Expert       | iterative deepening to depth 3, 2 s       |
//! | 5     | Master       | iterative deepening to depth 4, 2 s       |
//!
//! All search levels share the same time budget; they differ only in depth.

use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Move, MoveList, Rules};
use super::search::choose_by_search;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::time::Duration;

/// Time budget for every search-based level.
pub const SEARCH_TIME_BUDGET: Duration = Duration::from_millis(2000);

/// AI difficulty levels, 1 (weakest) to 5 (strongest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Level 1: plays any legal move
    Beginner = 1,
    /// Level 2: grabs material whenever it can
    Intermediate = 2,
    /// Level 3: looks 2 plies ahead
    Advanced = 3,
    /// Level 4: looks 3 plies ahead
    Expert = 4,
    /// Level 5: looks 4 plies ahead
    Master = 5,
}

/// How a move is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    UniformRandom,
    GreedyCapture,
    BoundedSearch { max_depth: u8, time_budget: Duration },
}

impl Difficulty {
    /// All levels, weakest first
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
            Difficulty::Master,
        ]
    }

    pub fn from_level(level: u8) -> EngineResult<Difficulty> {
        match level {
            1 => Ok(Difficulty::Beginner),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            4 => Ok(Difficulty::Expert),
            5 => Ok(Difficulty::Master),
            _ => Err(EngineError::InvalidDifficulty { level }),
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
            Difficulty::Master => "Master",
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Difficulty::Beginner => Strategy::UniformRandom,
            Difficulty::Intermediate => Strategy::GreedyCapture,
            Difficulty::Advanced => Strategy::BoundedSearch {
                max_depth: 2,
                time_budget: SEARCH_TIME_BUDGET,
            },
            Difficulty::Expert => Strategy::BoundedSearch {
                max_depth: 3,
                time_budget: SEARCH_TIME_BUDGET,
            },
            Difficulty::Master => Strategy::BoundedSearch {
                max_depth: 4,
                time_budget: SEARCH_TIME_BUDGET,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.level())
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = EngineError;

    fn try_from(level: u8) -> EngineResult<Self> {
        Difficulty::from_level(level)
    }
}

impl Strategy {
    /// Pick a move for the side to move, or `None` if there is no legal move.
    pub fn choose<R, G>(&self, pos: &R, rng: &mut G) -> Option<Move>
    where
        R: Rules,
        G: Rng + ?Sized,
    {
        match *self {
            Strategy::UniformRandom => pos.legal_moves().choose(rng).copied(),
            Strategy::GreedyCapture => {
                let moves = pos.legal_moves();
                let captures: MoveList = moves.iter().copied().filter(|mv| mv.is_capture()).collect();
                if captures.is_empty() {
                    moves.choose(rng).copied()
                } else {
                    captures.choose(rng).copied()
                }
            }
            Strategy::BoundedSearch {
                max_depth,
                time_budget,
            } => choose_by_search(pos, max_depth, time_budget, rng),
        }
    }
}

/// Select a move for the side to move at `difficulty`.
///
/// Returns `None` only when the position has no legal moves. Never fails
/// because of the time budget: a search that runs out of time still returns
/// a legal move.
pub fn select_move<R: Rules>(pos: &R, difficulty: Difficulty) -> Option<Move> {
    select_move_with_rng(pos, difficulty, &mut rand::thread_rng())
}

/// [`select_move`] with an injected random generator, for reproducible play.
pub fn select_move_with_rng<R, G>(pos: &R, difficulty: Difficulty, rng: &mut G) -> Option<Move>
where
    R: Rules,
    G: Rng + ?Sized,
{
    difficulty.strategy().choose(pos, rng)
}
