//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A line typed by the player.
    PlayerInput {
        /// Phase the game was in.
        phase: String,
        /// The raw input.
        input: String,
        /// When typed.
        timestamp: DateTime<Utc>,
    },
    /// The player moved somewhere.
    Moved {
        /// Where to.
        location: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A clue was recorded.
    ClueFound {
        /// Location the clue belongs to.
        location: String,
        /// The clue text.
        clue: String,
        /// When found.
        timestamp: DateTime<Utc>,
    },
    /// The player spoke to someone.
    Conversation {
        /// Who.
        character: String,
        /// What they said.
        said: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// An item was picked up.
    ItemFound {
        /// Item name.
        item: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// An item was used.
    ItemUsed {
        /// Item name.
        item: String,
        /// Score change applied.
        score_delta: i32,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// A door mini-game finished.
    MiniGame {
        /// Door number (1-3).
        door: u8,
        /// Whether the door opened.
        won: bool,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// Input was rejected or a turn failed.
    Error {
        /// The error message.
        message: String,
        /// When.
        timestamp: DateTime<Utc>,
    },
    /// The investigation ended.
    GameOver {
        /// Whether the culprit was named.
        solved: bool,
        /// Final score.
        score: u32,
        /// When.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::PlayerInput { timestamp, .. }
            | Self::Moved { timestamp, .. }
            | Self::ClueFound { timestamp, .. }
            | Self::Conversation { timestamp, .. }
            | Self::ItemFound { timestamp, .. }
            | Self::ItemUsed { timestamp, .. }
            | Self::MiniGame { timestamp, .. }
            | Self::Error { timestamp, .. }
            | Self::GameOver { timestamp, .. } => *timestamp,
        }
    }
}
