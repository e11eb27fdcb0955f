//! Durable key/value storage for progress snapshots.
//!
//! Implementations only move text: `read_raw`, `write_raw` and `delete`.
//! Encoding, decoding and the handling of corrupt payloads live in the
//! provided `save` and `load` methods so every medium behaves the same.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::ProgressSnapshot;

/// Error type for the durable medium.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A durable store of progress snapshots.
pub trait ProgressStore {
    /// Read the stored payload for `key`, if any.
    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the payload for `key` in a single write.
    fn write_raw(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Serialize and write `snapshot`, overwriting any earlier one.
    fn save(&mut self, key: &str, snapshot: &ProgressSnapshot) -> Result<(), StoreError> {
        let payload = snapshot.to_json()?;
        self.write_raw(key, &payload)?;
        debug!(key, section = %snapshot.section, page = snapshot.page_index, "snapshot saved");
        Ok(())
    }

    /// Load the snapshot for `key`.
    ///
    /// A payload that no longer parses is removed and reported as absent.
    fn load(&mut self, key: &str) -> Result<Option<ProgressSnapshot>, StoreError> {
        let Some(payload) = self.read_raw(key)? else {
            return Ok(None);
        };
        match ProgressSnapshot::from_json(&payload) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable snapshot");
                self.delete(key)?;
                Ok(None)
            }
        }
    }

    /// `now - snapshot.saved_at < retention`.
    fn is_fresh(
        &self,
        snapshot: &ProgressSnapshot,
        now: DateTime<Utc>,
        retention: Duration,
    ) -> bool {
        is_fresh(snapshot, now, retention)
    }
}

/// `now - snapshot.saved_at < retention`.
pub fn is_fresh(snapshot: &ProgressSnapshot, now: DateTime<Utc>, retention: Duration) -> bool {
    snapshot.is_fresh(now, retention)
}

/// In-process store, for tests and hosts without a disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store an arbitrary payload, bypassing serialization.
    pub fn insert_raw(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.insert(key.into(), payload.into());
    }

    /// The stored payload for `key`, exactly as written.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One JSON file per session key inside a directory.
///
/// Writes land in a temporary sibling first and are renamed into place, so a
/// reader sees either the old payload or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// ASCII letters, digits, `-` and `.` are kept; every other byte becomes
    /// `_` followed by two hex digits, so distinct keys never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut file_name = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' => {
                    file_name.push(char::from(byte))
                }
                _ => {
                    file_name.push('_');
                    file_name.push_str(&hex::encode([byte]));
                }
            }
        }
        self.dir.join(format!("{file_name}.json"))
    }
}

impl ProgressStore for FileStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            // Bytes that are not UTF-8 are corrupt, not an I/O failure.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(err) => Err(err.into()),
        }
    }

    fn write_raw(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
