//! File-backed on-device store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::store::{PersistentStore, Result, StoreError};

/// On-device implementation of [`PersistentStore`].
///
/// # File Format
///
/// The whole store is one pretty-printed JSON object mapping keys to string
/// values. The file is read once at open; every write rewrites it through a
/// temp file and an atomic rename, so a crash leaves either the old or the
/// new contents on disk.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store file at `path`.
    ///
    /// A file that cannot be parsed is logged and treated as empty; it is
    /// overwritten on the next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(StoreError::Io)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Discarding unreadable store {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let json =
            serde_json::to_string_pretty(entries).map_err(|e| StoreError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(StoreError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(StoreError::Io)?;

        tracing::debug!("Saved {} keys to {}", entries.len(), self.path.display());

        Ok(())
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;

        let previous = entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.persist(&entries) {
            // Memory must not run ahead of disk.
            match previous {
                Some(old) => entries.insert(key.to_owned(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let previous = std::mem::take(&mut *entries);
        if let Err(e) = self.persist(&entries) {
            *entries = previous;
            return Err(e);
        }
        Ok(())
    }
}
