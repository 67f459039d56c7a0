use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store contents")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

/// Namespaced key-value store persisted as a single JSON map on disk.
///
/// A missing file is the first-run case and yields an empty map; an
/// unparsable file is logged and treated the same way, so stale or corrupt
/// state never escalates into a startup failure.
pub struct KvStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl KvStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(path = %path.display(), %err, "store file unreadable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Typed read. Missing keys and values that no longer match the
    /// expected shape both come back as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read();
        let value = entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(key, %err, "stored value does not match expected shape, ignoring");
                None
            }
        }
    }

    /// Write-through set: the entry is updated in memory and the whole map
    /// is flushed to disk before returning.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_value(value).map_err(|source| StoreError::Encode { source })?;
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), encoded);
        self.flush(&entries)
    }

    fn flush(&self, entries: &BTreeMap<String, serde_json::Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|source| StoreError::Encode { source })?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
