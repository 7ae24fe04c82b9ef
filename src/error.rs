//! Error types for the opponent engine
//!
//! Only user-facing input can fail: FEN strings, difficulty levels and typed
//! moves. Search timeouts are an internal signal (see
//! [`crate::agent::ai::SearchTimeout`]) and never surface here.

use thiserror::Error;

/// Errors that can occur while setting up positions or choosing an opponent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// FEN string could not be parsed into a legal position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Difficulty level outside the supported range
    #[error("Invalid difficulty level: {level} (must be 1-5)")]
    InvalidDifficulty { level: u8 },

    /// Move text could not be parsed
    #[error("Unrecognised move text '{text}'")]
    UnknownMove { text: String },

    /// Move is well-formed but not legal in the current position
    #[error("Illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
