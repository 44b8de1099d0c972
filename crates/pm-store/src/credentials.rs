//! Accounts: registration and password login.
//!
//! Passwords are stored as argon2 PHC strings with a random salt from the
//! OS RNG. Usernames are case-folded for lookup; the name as typed at
//! registration is kept for display.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::fold_username;
use crate::json_file::{read_map, write_map};

/// Password checks allowed per login.
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name. The username as typed, replaced by the detective name
    /// once a game is concluded.
    pub name: String,
    /// argon2 PHC string, e.g. `$argon2id$v=19$...`.
    pub hashed_password: String,
    /// Final score of the latest concluded game.
    #[serde(default)]
    pub score: u32,
}

/// The account store, one JSON file keyed by case-folded username.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Open the store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a new account with score 0.
    ///
    /// Returns `Ok(false)` if the username is taken.
    pub fn register(&self, username: &str, password: &str) -> StoreResult<bool> {
        let key = fold_username(username);
        let mut accounts = self.accounts()?;
        if accounts.contains_key(&key) {
            tracing::info!(user = %key, "registration refused, username taken");
            return Ok(false);
        }

        let account = Account {
            name: username.trim().to_string(),
            hashed_password: hash_password(password)?,
            score: 0,
        };
        accounts.insert(key.clone(), account);
        write_map(&self.path, &accounts)?;
        tracing::info!(user = %key, "account registered");
        Ok(true)
    }

    /// Check a password, asking `reprompt` for another one after each
    /// mismatch.
    ///
    /// `reprompt` receives the number of checks still allowed and returns
    /// the next password, or `None` to give up. At most
    /// [`MAX_LOGIN_ATTEMPTS`] passwords are checked. Unknown usernames
    /// return `Ok(false)` without prompting.
    pub fn authenticate<F>(&self, username: &str, password: &str, mut reprompt: F) -> StoreResult<bool>
    where
        F: FnMut(u32) -> Option<String>,
    {
        let key = fold_username(username);
        let Some(account) = self.account(&key)? else {
            tracing::info!(user = %key, "login refused, unknown user");
            return Ok(false);
        };

        let mut candidate = password.to_string();
        let mut remaining = MAX_LOGIN_ATTEMPTS;
        loop {
            if verify_password(&candidate, &account.hashed_password) {
                tracing::info!(user = %key, "login succeeded");
                return Ok(true);
            }
            remaining -= 1;
            if remaining == 0 {
                break;
            }
            match reprompt(remaining) {
                Some(next) => candidate = next,
                None => break,
            }
        }
        tracing::warn!(user = %key, "login failed");
        Ok(false)
    }

    /// Look up one account.
    pub fn account(&self, username: &str) -> StoreResult<Option<Account>> {
        Ok(self.accounts()?.remove(&fold_username(username)))
    }

    /// All accounts keyed by case-folded username.
    pub fn accounts(&self) -> StoreResult<BTreeMap<String, Account>> {
        read_map(&self.path)
    }

    /// Store the final score of a game, and the detective name if given.
    pub fn record_score(&self, username: &str, display_name: Option<&str>, score: u32) -> StoreResult<()> {
        let key = fold_username(username);
        let mut accounts = self.accounts()?;
        let account = accounts
            .get_mut(&key)
            .ok_or_else(|| StoreError::UnknownUser(key.clone()))?;
        account.score = score;
        if let Some(name) = display_name.map(str::trim).filter(|n| !n.is_empty()) {
            account.name = name.to_string();
        }
        write_map(&self.path, &accounts)?;
        tracing::info!(user = %key, score, "score recorded");
        Ok(())
    }
}

fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Hash(e.to_string()))
}

fn verify_password(password: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("user_data.json"));
        (dir, store)
    }

    #[test]
    fn register_once() {
        let (_dir, store) = store();
        assert!(store.register("holmes", "pw1").unwrap());
        assert!(!store.register("holmes", "pw2").unwrap());
        assert!(!store.register("HOLMES", "pw2").unwrap());
    }

    #[test]
    fn plaintext_is_never_stored() {
        let (_dir, store) = store();
        store.register("Holmes", "pw1").unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("\"pw1\""));
        let account = store.account("holmes").unwrap().unwrap();
        assert!(account.hashed_password.starts_with("$argon2"));
        assert_eq!(account.name, "Holmes");
        assert_eq!(account.score, 0);
    }

    #[test]
    fn correct_password_logs_in_first_try() {
        let (_dir, store) = store();
        store.register("holmes", "pw1").unwrap();
        let mut prompts = 0;
        let ok = store
            .authenticate("Holmes", "pw1", |_| {
                prompts += 1;
                None
            })
            .unwrap();
        assert!(ok);
        assert_eq!(prompts, 0);
    }

    #[test]
    fn five_wrong_passwords_fail() {
        let (_dir, store) = store();
        store.register("holmes", "pw1").unwrap();
        let mut offered = Vec::new();
        let ok = store
            .authenticate("holmes", "bad", |remaining| {
                offered.push(remaining);
                Some("bad".to_string())
            })
            .unwrap();
        assert!(!ok);
        assert_eq!(offered, vec![4, 3, 2, 1]);
    }

    #[test]
    fn retry_can_succeed() {
        let (_dir, store) = store();
        store.register("holmes", "pw1").unwrap();
        let mut answers = vec!["pw1".to_string(), "nope".to_string()];
        let ok = store.authenticate("holmes", "bad", |_| answers.pop()).unwrap();
        assert!(ok);
    }

    #[test]
    fn giving_up_fails() {
        let (_dir, store) = store();
        store.register("holmes", "pw1").unwrap();
        assert!(!store.authenticate("holmes", "bad", |_| None).unwrap());
    }

    #[test]
    fn unknown_user_fails_without_prompt() {
        let (_dir, store) = store();
        let ok = store
            .authenticate("watson", "pw", |_| panic!("should not prompt"))
            .unwrap();
        assert!(!ok);
    }

    #[test]
    fn record_score_overwrites() {
        let (_dir, store) = store();
        store.register("holmes", "pw1").unwrap();
        store.record_score("holmes", Some("Hercule"), 42).unwrap();
        store.record_score("holmes", None, 7).unwrap();
        let account = store.account("holmes").unwrap().unwrap();
        assert_eq!(account.score, 7);
        assert_eq!(account.name, "Hercule");
    }

    #[test]
    fn record_score_for_unknown_user() {
        let (_dir, store) = store();
        assert!(matches!(
            store.record_score("nobody", None, 1),
            Err(StoreError::UnknownUser(_))
        ));
    }
}
