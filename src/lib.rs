//! Computer chess opponent with five difficulty levels.
//!
//! The entry point is [`select_move`]: give it a position and a
//! [`Difficulty`] and it returns a legal move, or `None` when the side to
//! move has no legal moves.
//!
//! ```rust
//! use chess_opponent::{select_move, Difficulty, Position, Rules};
//!
//! let pos = Position::default();
//! let mv = select_move(&pos, Difficulty::Advanced).unwrap();
//! assert!(pos.legal_moves().contains(&mv));
//! ```

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use agent::ai::{select_move, select_move_with_rng, AIConfig, AIPlayer, Difficulty};
pub use agent::player::{GameResult, Player};
pub use error::{EngineError, EngineResult};
pub use game_repr::{Color, GameStatus, Move, Position, Rules};
pub use orchestrator::{GameRecord, MatchConfig, Orchestrator};
