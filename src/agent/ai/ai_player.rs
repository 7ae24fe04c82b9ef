// AI Player implementation using the difficulty policy

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Move, Position};
use super::difficulty::{select_move_with_rng, Difficulty};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for a single AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIConfig {
    /// The difficulty/strength level
    pub difficulty: Difficulty,
    /// Seed for move randomisation; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl AIConfig {
    /// Create a new AI configuration
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    /// Fix the random seed so games can be replayed exactly
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        format!("AI ({})", self.difficulty.name())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self::new(Difficulty::Beginner)
    }
}

/// AI Player that picks moves through the difficulty policy
pub struct AIPlayer {
    config: AIConfig,
    rng: StdRng,
    name: String,
}

impl AIPlayer {
    /// Create a new AI player
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_opponent::agent::ai::{AIConfig, AIPlayer, Difficulty};
    ///
    /// let ai = AIPlayer::new(AIConfig::new(Difficulty::Expert).with_seed(7));
    /// assert_eq!(ai.config().difficulty, Difficulty::Expert);
    /// ```
    pub fn new(config: AIConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            name: config.display_string(),
        }
    }

    /// Create an AI player with specific difficulty level and an OS seed
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AIConfig::new(difficulty))
    }

    pub fn config(&self) -> &AIConfig {
        &self.config
    }
}

impl Player for AIPlayer {
    /// Blocks for at most the difficulty's time budget.
    fn get_move(&mut self, position: &Position) -> Option<Move> {
        let mv = select_move_with_rng(position, self.config.difficulty, &mut self.rng);
        debug!("[{}] chose {:?}", self.name, mv.map(|m| m.to_string()));
        mv
    }

    fn game_ended(&mut self, result: GameResult) {
        info!("[{}] game over: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
