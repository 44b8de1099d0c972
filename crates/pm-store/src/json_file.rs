//! Whole-file JSON maps keyed by username.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};

/// Read a map from `path`. A missing or blank file is an empty map.
pub(crate) fn read_map<T: DeserializeOwned>(path: &Path) -> StoreResult<BTreeMap<String, T>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(BTreeMap::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(&text).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a map to `path` as pretty JSON, creating parent directories.
pub(crate) fn write_map<T: Serialize>(path: &Path, map: &BTreeMap<String, T>) -> StoreResult<()> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(map).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(io_err)?;
    tracing::debug!(path = %path.display(), records = map.len(), "store written");
    Ok(())
}
