//! Shared mini-game status.

use serde::{Deserialize, Serialize};

/// Where a mini-game session stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiniGameStatus {
    /// Still accepting moves.
    #[default]
    InProgress,
    /// The player cleared the game.
    Won,
    /// The player ran out of attempts.
    Exhausted,
}

impl MiniGameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

impl std::fmt::Display for MiniGameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Won => write!(f, "Won"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
