pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{AIConfig, AIPlayer, Difficulty, SearchResult};
