//! Error types for the game controller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum GameError {
    /// The player typed something the current prompt does not accept.
    #[error("{0}")]
    InvalidInput(String),

    /// The game is over; no more input is accepted.
    #[error("the investigation has already ended")]
    SessionEnded,

    /// The session was already concluded and saved.
    #[error("this game has already been concluded")]
    AlreadyConcluded,

    /// No player is logged in.
    #[error("no player is logged in")]
    NotLoggedIn,

    /// The session log could not be written.
    #[error("failed to write log {path}: {source}")]
    Log {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Mini-game error.
    #[error("{0}")]
    MiniGame(#[from] pm_minigames::MiniGameError),

    /// Store error.
    #[error("{0}")]
    Store(#[from] pm_store::StoreError),
}

impl GameError {
    /// Build an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
