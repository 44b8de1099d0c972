//! Error types for the mini-games.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for mini-game operations.
pub type MiniGameResult<T> = Result<T, MiniGameError>;

/// Errors that can occur while playing a mini-game.
#[derive(Debug, Error)]
pub enum MiniGameError {
    /// Word-game input that is neither a letter nor a full-length word.
    #[error("Please enter a valid single letter or a complete {0}-letter word.")]
    InvalidGuess(usize),

    /// Rock-paper-scissors input that names no hand.
    #[error("Pick only rock, paper, or scissors!! (got '{0}')")]
    InvalidHand(String),

    /// The game already reached a terminal state.
    #[error("this game is already over")]
    Finished,

    /// No riddle has been posed yet.
    #[error("no riddle has been posed")]
    NoRiddle,

    /// The content file could not be read.
    #[error("failed to read {path}: {source}")]
    ContentIo {
        /// Path of the content file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The content file is not valid JSON.
    #[error("invalid content in {path}: {source}")]
    ContentFormat {
        /// Path of the content file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
