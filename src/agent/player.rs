//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can be asked for a move in a position: the AI
//! opponent, a scripted test player, a remote peer. The [`Orchestrator`]
//! drives players through this trait and never cares which kind it holds.
//!
//! The trait focuses on behaviour rather than construction; every
//! implementation provides its own constructor.
//!
//! `get_move()` is synchronous. An AI player blocks for the duration of its
//! search (bounded by its time budget), which is fine for a headless game loop.
//!
//! [`Orchestrator`]: crate::orchestrator::Orchestrator

use crate::game_repr::{Color, Move, Position};
use std::fmt;

/// Result of a finished (or abandoned) game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black was checkmated
    WhiteWins,
    /// White was checkmated
    BlackWins,
    /// Insufficient material, threefold repetition or fifty-move rule
    Draw,
    /// Side to move has no legal moves but is not in check
    Stalemate,
    /// Ply limit reached or a player gave up without a result
    Unfinished,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "1-0 (checkmate)",
            GameResult::BlackWins => "0-1 (checkmate)",
            GameResult::Draw => "1/2-1/2 (draw)",
            GameResult::Stalemate => "1/2-1/2 (stalemate)",
            GameResult::Unfinished => "* (unfinished)",
        };
        f.write_str(text)
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
pub trait Player {
    /// Request the next move for the side to move in `position`.
    ///
    /// Returns `None` if the player cannot or will not move (no legal moves,
    /// resignation). A returned move must be legal in `position`; the
    /// orchestrator treats anything else as a bug.
    fn get_move(&mut self, position: &Position) -> Option<Move>;

    /// Called after the opponent's move has been played.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called once when the game is over.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
