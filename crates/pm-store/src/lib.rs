//! Persistence for The Poirot Mystery.
//!
//! Two flat JSON stores keyed by case-folded username: accounts
//! (credentials and score) and investigation progress. Both are
//! read-modify-written on every operation and assume a single process.

pub mod credentials;
pub mod error;
mod json_file;
pub mod leaderboard;
pub mod progress;

pub use credentials::{Account, CredentialStore, MAX_LOGIN_ATTEMPTS};
pub use error::{StoreError, StoreResult};
pub use leaderboard::{DEFAULT_TOP, Leaderboard, LeaderboardEntry};
pub use progress::{ProgressSnapshot, ProgressStore};

/// Normalize a username into its storage key.
pub fn fold_username(username: &str) -> String {
    username.trim().to_lowercase()
}
