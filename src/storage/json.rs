//! JSON file-based token store.
//!
//! This module provides a simple, human-readable persistence implementation
//! using JSON serialization. It uses atomic file writes (write-to-temp +
//! rename) to prevent corruption on crashes, and saves eagerly on every
//! change since the stored value is a single small token.

use crate::domain::error::{Result, RosterdeckError};
use crate::storage::backend::TokenStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. The token lives in a
/// versioned object rather than bare in the file, leaving room for future
/// migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// The persisted session token, absent after logout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            token: None,
        }
    }
}

/// JSON file token store.
///
/// Keeps the session token in a human-readable JSON file with atomic writes.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "token": "QpwL5tke4Pnpja7X4"
/// }
/// ```
///
/// # Examples
///
/// ```no_run
/// use rosterdeck::storage::{JsonTokenStore, TokenStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonTokenStore::new(PathBuf::from("/tmp/session.json"))?;
/// store.set("QpwL5tke4Pnpja7X4")?;
/// assert!(store.get()?.is_some());
/// # Ok::<(), rosterdeck::domain::RosterdeckError>(())
/// ```
#[derive(Debug)]
pub struct JsonTokenStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data, loaded on creation.
    data: StorageData,
}

impl JsonTokenStore {
    /// Creates or opens a JSON token store.
    ///
    /// If the file exists, loads its contents. Otherwise starts empty; the
    /// file is created on the first write. Parent directories are created
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON token store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            StorageData::default()
        };

        tracing::debug!(has_token = data.token.is_some(), "token store initialized");

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| RosterdeckError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded token store data");
        Ok(data)
    }

    /// Saves the container to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left in a corrupt state even if the process
    /// crashes mid-write.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving token store");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| RosterdeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("token store saved");
        Ok(())
    }
}

impl TokenStore for JsonTokenStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.data.token.clone())
    }

    fn set(&mut self, token: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_token").entered();
        self.data.token = Some(token.to_string());
        self.save_to_file()
    }

    fn remove(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_token").entered();
        if self.data.token.take().is_some() {
            self.save_to_file()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_across_store_instances() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        {
            let mut store = JsonTokenStore::new(path.clone()).expect("create store");
            assert_eq!(store.get().expect("get"), None);
            store.set("QpwL5tke4Pnpja7X4").expect("set");
        }

        let store = JsonTokenStore::new(path).expect("reopen store");
        assert_eq!(
            store.get().expect("get"),
            Some("QpwL5tke4Pnpja7X4".to_string())
        );
    }

    #[test]
    fn remove_clears_persisted_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let mut store = JsonTokenStore::new(path.clone()).expect("create store");
        store.set("tok").expect("set");
        store.remove().expect("remove");
        assert_eq!(store.get().expect("get"), None);

        let store = JsonTokenStore::new(path).expect("reopen store");
        assert_eq!(store.get().expect("get"), None);
    }

    #[test]
    fn removing_absent_token_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store =
            JsonTokenStore::new(dir.path().join("session.json")).expect("create store");
        store.remove().expect("remove on empty store");
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("write corrupt file");

        let err = JsonTokenStore::new(path).expect_err("corrupt file must fail");
        assert!(matches!(err, RosterdeckError::Storage(_)));
    }
}
