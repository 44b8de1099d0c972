//! Ranking of players by their latest score.

use std::collections::BTreeMap;

use crate::credentials::{Account, CredentialStore};
use crate::error::StoreResult;

/// Number of players shown by default.
pub const DEFAULT_TOP: usize = 5;

/// One ranked player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Display name.
    pub name: String,
    /// Latest score.
    pub score: u32,
}

/// Players ordered by score, highest first. Ties are ordered by name.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Build a ranking from stored accounts.
    pub fn from_accounts(accounts: &BTreeMap<String, Account>) -> Self {
        let mut entries: Vec<LeaderboardEntry> = accounts
            .values()
            .map(|a| LeaderboardEntry {
                name: a.name.clone(),
                score: a.score,
            })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        Self { entries }
    }

    /// Load the ranking from the account store.
    pub fn load(store: &CredentialStore) -> StoreResult<Self> {
        Ok(Self::from_accounts(&store.accounts()?))
    }

    /// The best `n` players.
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of ranked players.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody has registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str, score: u32) -> Account {
        Account {
            name: name.to_string(),
            hashed_password: String::new(),
            score,
        }
    }

    #[test]
    fn ranks_by_score() {
        let mut accounts = BTreeMap::new();
        accounts.insert("a".to_string(), account("Ada", 10));
        accounts.insert("b".to_string(), account("Bea", 40));
        accounts.insert("c".to_string(), account("Cy", 10));
        let board = Leaderboard::from_accounts(&accounts);
        let names: Vec<&str> = board.top(DEFAULT_TOP).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Bea", "Ada", "Cy"]);
        assert_eq!(board.top(1).len(), 1);
    }

    #[test]
    fn empty_store_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("user_data.json"));
        let board = Leaderboard::load(&store).unwrap();
        assert!(board.is_empty());
        assert!(board.top(5).is_empty());
    }
}
