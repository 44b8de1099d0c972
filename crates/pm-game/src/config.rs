//! Configuration for a game.

use std::path::PathBuf;

use pm_minigames::rps::DEFAULT_BUDGET;
use pm_minigames::word::DEFAULT_ATTEMPTS;

/// File name of the account store inside the data directory.
pub const ACCOUNTS_FILE: &str = "user_data.json";
/// File name of the progress store inside the data directory.
pub const PROGRESS_FILE: &str = "progress.json";

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Directory holding the account and progress stores.
    pub data_dir: PathBuf,
    /// Mini-game content (`game_data.json`).
    pub content_path: PathBuf,
    /// Where the session journal is written when the game ends.
    pub log_path: PathBuf,
    /// RNG seed for reproducible games. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Per-character delay of the typewriter effect, in milliseconds.
    pub reveal_delay_ms: u64,
    /// Attempts in the word-guess game.
    pub word_attempts: u32,
    /// Losses allowed in rock-paper-scissors.
    pub rps_budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            content_path: PathBuf::from("data/game_data.json"),
            log_path: PathBuf::from("log_file"),
            seed: None,
            reveal_delay_ms: 5,
            word_attempts: DEFAULT_ATTEMPTS,
            rps_budget: DEFAULT_BUDGET,
        }
    }
}

impl GameConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the content file.
    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = path.into();
        self
    }

    /// Set the log file.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the typewriter delay. Zero disables the effect.
    pub fn with_reveal_delay(mut self, ms: u64) -> Self {
        self.reveal_delay_ms = ms;
        self
    }

    /// Set the word-guess attempts (at least 1).
    pub fn with_word_attempts(mut self, attempts: u32) -> Self {
        self.word_attempts = attempts.max(1);
        self
    }

    /// Set the rock-paper-scissors loss budget (at least 1).
    pub fn with_rps_budget(mut self, budget: u32) -> Self {
        self.rps_budget = budget.max(1);
        self
    }

    /// Path of the account store.
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir.join(ACCOUNTS_FILE)
    }

    /// Path of the progress store.
    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }
}
