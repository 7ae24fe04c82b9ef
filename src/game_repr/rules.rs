//! The contract between the search engine and a rules engine.
//!
//! The engine never generates moves or judges legality itself. Everything it
//! knows about the game comes through [`Rules`]: legal move lists, reversible
//! apply/undo, terminal detection and the piece on a square (for evaluation).

use super::{Color, Move, MoveList, Piece};
use std::ops::{Deref, DerefMut};

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

/// Outcome of a position from the rules engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is checkmated.
    Checkmate,
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Ongoing
    }
}

/// Rules engine interface consumed by the search.
///
/// `apply` and `undo` must pair up in strict LIFO order. Implementations panic
/// on an illegal `apply` or on `undo` with nothing to revert; both are
/// integration bugs, not game conditions.
pub trait Rules: Clone {
    /// All legal moves for the side to move, with capture/promotion metadata.
    fn legal_moves(&self) -> MoveList;

    fn apply(&mut self, mv: Move);

    /// Reverts the most recent `apply` that has not been undone yet.
    fn undo(&mut self);

    fn status(&self) -> GameStatus;

    fn side_to_move(&self) -> Color;

    /// Piece on `square` (`0..64`, a1 = 0).
    fn piece_at(&self, square: u8) -> Option<Piece>;

    /// Applies `mv` and returns a guard that undoes it when dropped.
    fn applied(&mut self, mv: Move) -> Applied<'_, Self> {
        self.apply(mv);
        Applied { pos: self }
    }
}

/// Scoped apply: the move is undone when the guard goes out of scope,
/// including early returns through `?`.
pub struct Applied<'a, R: Rules> {
    pos: &'a mut R,
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}
