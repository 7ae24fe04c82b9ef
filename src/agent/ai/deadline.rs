// Wall-clock deadline shared by every frame of one search

use cfg_if::cfg_if;
use std::time::Duration;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub use web_time::Instant;
    } else {
        pub use std::time::Instant;
    }
}

/// Absolute point in time after which a search must stop.
///
/// `Copy` so it can be handed down the recursion by value; every frame sees
/// the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline `budget` from now.
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    pub fn at(instant: Instant) -> Self {
        Self { at: Some(instant) }
    }

    /// Never expires. Used by tests and analysis tools.
    pub fn unlimited() -> Self {
        Self { at: None }
    }

    pub fn is_exceeded(&self) -> bool {
        match self.at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}
