//! Headless game coordination between two players.
//!
//! This module contains the [`Orchestrator`], which plays one game from a
//! [`MatchConfig`] between two [`Player`]s. It manages:
//! - Turn management (request move, execute, notify opponent)
//! - Game end detection through [`Rules::status`]
//! - The ply limit, so engine-vs-engine games always finish
//!
//! # Example Flow
//!
//! ```text
//! [Load starting FEN] -> [Request Move] -> [Player provides move]
//!   -> [Execute Move] -> [Notify opponent] -> [Check End] -> [Request Move] ...
//! ```

use crate::agent::player::{GameResult, Player};
use crate::error::EngineResult;
use crate::game_repr::{Color, DrawReason, GameStatus, Move, Position, Rules, STARTING_FEN};
use log::{debug, info, warn};

/// Configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// FEN of the position the game starts from
    pub starting_fen: String,
    /// Stop with [`GameResult::Unfinished`] after this many plies
    pub max_plies: Option<u32>,
}

impl MatchConfig {
    /// Standard starting position, no ply limit.
    pub fn new() -> Self {
        Self {
            starting_fen: STARTING_FEN.to_string(),
            max_plies: None,
        }
    }

    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = fen.into();
        self
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a played game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    /// Every move played, in order
    pub moves: Vec<Move>,
    pub final_fen: String,
}

impl GameRecord {
    /// Moves in long algebraic notation separated by spaces.
    pub fn move_text(&self) -> String {
        self.moves
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Plays a game between a White and a Black player.
///
/// # Game Flow
///
/// Each turn the orchestrator:
/// 1. Calls [`request_move`](Orchestrator::request_move) on the side to move
/// 2. Calls [`process_move`](Orchestrator::process_move) to execute the move
///    and notify the opponent
/// 3. Calls [`check_game_end`](Orchestrator::check_game_end)
pub struct Orchestrator {
    position: Position,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    moves: Vec<Move>,
    max_plies: Option<u32>,
    result: Option<GameResult>,
}

impl Orchestrator {
    /// Set up a game. Fails if the starting FEN does not parse.
    pub fn new(
        config: &MatchConfig,
        white: Box<dyn Player>,
        black: Box<dyn Player>,
    ) -> EngineResult<Self> {
        let position = Position::from_fen(&config.starting_fen)?;
        info!(
            "New game: {} (White) vs {} (Black) from {}",
            white.name(),
            black.name(),
            config.starting_fen
        );

        Ok(Self {
            position,
            white,
            black,
            moves: Vec::new(),
            max_plies: config.max_plies,
            result: None,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_turn(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn is_game_active(&self) -> bool {
        self.result.is_none()
    }

    /// Play until the game ends or the ply limit is hit.
    pub fn play(mut self) -> GameRecord {
        // The starting position may already be decided
        self.check_game_end();

        while self.is_game_active() {
            if self.ply_limit_reached() {
                info!("Ply limit reached after {} moves", self.moves.len());
                self.handle_game_end(GameResult::Unfinished);
                break;
            }

            match self.request_move() {
                Some(mv) => {
                    self.process_move(mv);
                    self.check_game_end();
                }
                None => {
                    warn!("{} did not provide a move", self.current_player().name());
                    self.handle_game_end(GameResult::Unfinished);
                }
            }
        }

        GameRecord {
            result: self.result.unwrap_or(GameResult::Unfinished),
            final_fen: self.position.to_fen(),
            moves: self.moves,
        }
    }

    /// Ask the side to move for its move.
    pub fn request_move(&mut self) -> Option<Move> {
        let position = &self.position;
        let player = match position.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        player.get_move(position)
    }

    /// Execute a move and notify the opponent.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal in the current position. Players are
    /// required to return legal moves, so this is a bug in the player.
    pub fn process_move(&mut self, mv: Move) {
        let mover = self.current_turn();
        assert!(
            self.position.legal_moves().contains(&mv),
            "{} provided illegal move {} in {}",
            self.current_player().name(),
            mv,
            self.position.to_fen()
        );

        self.position.apply(mv);
        self.moves.push(mv);
        debug!("{:?} played {}", mover, mv);

        let opponent = match mover {
            Color::White => &mut self.black,
            Color::Black => &mut self.white,
        };
        opponent.opponent_moved(mv);
    }

    /// End the game if the position is checkmate, stalemate or a draw.
    pub fn check_game_end(&mut self) {
        match self.position.status() {
            GameStatus::Ongoing => {}
            GameStatus::Checkmate => {
                let winner = self.current_turn().opposite();
                info!("Checkmate! {:?} wins", winner);
                self.handle_game_end(GameResult::from_winner(winner));
            }
            GameStatus::Stalemate => {
                info!("Stalemate! Game is a draw");
                self.handle_game_end(GameResult::Stalemate);
            }
            GameStatus::Draw(reason) => {
                info!("Draw by {}", draw_reason_text(reason));
                self.handle_game_end(GameResult::Draw);
            }
        }
    }

    fn ply_limit_reached(&self) -> bool {
        self.max_plies
            .is_some_and(|limit| self.moves.len() >= limit as usize)
    }

    fn current_player(&self) -> &dyn Player {
        match self.current_turn() {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    fn handle_game_end(&mut self, result: GameResult) {
        self.result = Some(result);
        self.white.game_ended(result);
        self.black.game_ended(result);
    }
}

fn draw_reason_text(reason: DrawReason) -> &'static str {
    match reason {
        DrawReason::InsufficientMaterial => "insufficient material",
        DrawReason::ThreefoldRepetition => "threefold repetition",
        DrawReason::FiftyMoveRule => "fifty-move rule",
    }
}
