//! Local persistent key-value store.
//!
//! A single JSON object kept on disk; this program writes string values.
//! Entries survive restarts and are only removed by an explicit `clear` (or
//! by deleting the file). Clones share one lock, so a store opened once at startup and
//! handed around behaves as a single process-wide service.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl LocalStore {
    /// Opens the store backed by `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value stored under `key`, if any. Values some other
    /// writer stored as JSON rather than text come back as their JSON text.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_entries()?.remove(key).map(entry_text))
    }

    /// Stores `value` under `key`, overwriting any prior value.
    ///
    /// A file that no longer parses as a JSON object is replaced rather than
    /// blocking the write.
    pub fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StoreError::Serialization(e)) => {
                log::warn!(
                    "Local storage at {} is unreadable ({}); starting over",
                    self.path.display(),
                    e
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), Value::String(value));
        self.write_entries(&entries)
    }

    /// All entries, ordered by key.
    pub fn entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self
            .read_entries()?
            .into_iter()
            .map(|(k, v)| (k, entry_text(v)))
            .collect())
    }

    /// Removes every entry by deleting the backing file.
    pub fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        let buf = match fs::read(&self.path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&buf)?)
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;

        // Write then rename so readers never observe a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn entry_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
