//! File-backed key/value store.
//!
//! A flat JSON object of string keys to string values, stored at
//! ${INFOVERIFY_HOME}/local_storage.json. Every write rewrites the whole file
//! through a temporary sibling and a rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::paths;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Opens the store at the default location.
    pub fn open_default() -> Self {
        Self::at(paths::storage_path())
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse storage at {}", self.path.display()))
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(entries).context("Failed to encode storage")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write storage to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("local_storage.json"));
        assert_eq!(storage.get("isAuthenticated").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("home").join("local_storage.json");

        LocalStorage::at(&path).set("isAuthenticated", "true").unwrap();

        let reopened = LocalStorage::at(&path);
        assert_eq!(
            reopened.get("isAuthenticated").unwrap().as_deref(),
            Some("true")
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("local_storage.json"));

        storage.set("theme", "dark").unwrap();
        storage.set("isAuthenticated", "true").unwrap();

        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("local_storage.json"));

        storage.set("isAuthenticated", "false").unwrap();
        storage.set("isAuthenticated", "true").unwrap();

        assert_eq!(
            storage.get("isAuthenticated").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        fs::write(&path, "not json").unwrap();

        let err = LocalStorage::at(&path).get("isAuthenticated").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse storage"));
    }
}
