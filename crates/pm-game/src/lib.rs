//! Game controller for The Poirot Mystery.
//!
//! `GameSession` is a line-driven state machine: each call to
//! [`GameSession::process`] consumes one line of player input and returns
//! the text to show. `Campaign` wraps a session with accounts and saved
//! progress. Everything that happens is recorded in a [`Journal`] that is
//! written to the log file when the game ends.

pub mod accusation;
pub mod campaign;
pub mod config;
pub mod doors;
pub mod error;
pub mod journal;
pub mod narrative;
pub mod phase;
pub mod reply;
pub mod rooms;
pub mod scoring;
pub mod session;

pub use campaign::{Campaign, Conclusion, SessionStart};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use journal::{Journal, JournalEntry};
pub use phase::Phase;
pub use reply::{Reply, Tone};
pub use scoring::{ScoreCard, Verdict};
pub use session::{Ending, GameSession};
