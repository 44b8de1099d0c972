//! Score keeping.

use serde::{Deserialize, Serialize};

/// Something that absorbs score changes, such as the player's running score.
pub trait ScoreSink {
    /// Apply a signed score change.
    fn apply_delta(&mut self, delta: i32);
}

/// A score that never drops below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    /// Create a score with the given value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Current value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ScoreSink for Score {
    fn apply_delta(&mut self, delta: i32) {
        self.0 = self.0.saturating_add_signed(delta);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
