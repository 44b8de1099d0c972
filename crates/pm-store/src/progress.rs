//! Saved investigation progress, one record per user.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pm_core::{LocationId, LocationProgress};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::fold_username;
use crate::json_file::{read_map, write_map};

/// Everything persisted about one player's investigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Name the player gave their detective.
    #[serde(rename = "name", default)]
    pub detective_name: Option<String>,
    /// Per-location clues and flags.
    #[serde(rename = "Location_clues", default)]
    pub locations: BTreeMap<LocationId, LocationProgress>,
}

impl ProgressSnapshot {
    /// Total number of clues across all locations.
    pub fn clue_count(&self) -> usize {
        self.locations.values().map(|l| l.clues.len()).sum()
    }
}

/// The progress store, one JSON file keyed by case-folded username.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Open the store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a user's saved progress.
    ///
    /// Fails with [`StoreError::NoProgress`] when the user has no record or
    /// the record holds no locations.
    pub fn restore(&self, username: &str) -> StoreResult<ProgressSnapshot> {
        let key = fold_username(username);
        let mut records: BTreeMap<String, ProgressSnapshot> = read_map(&self.path)?;
        match records.remove(&key) {
            Some(snapshot) if !snapshot.locations.is_empty() => {
                tracing::info!(user = %key, clues = snapshot.clue_count(), "progress restored");
                Ok(snapshot)
            }
            _ => Err(StoreError::NoProgress(key)),
        }
    }

    /// Replace a user's saved progress.
    pub fn persist(&self, username: &str, snapshot: &ProgressSnapshot) -> StoreResult<()> {
        let key = fold_username(username);
        let mut records: BTreeMap<String, ProgressSnapshot> = read_map(&self.path)?;
        records.insert(key.clone(), snapshot.clone());
        write_map(&self.path, &records)?;
        tracing::info!(user = %key, clues = snapshot.clue_count(), "progress saved");
        Ok(())
    }
}
