use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::ports::{KeyValueStore, StoreError};

/// Key-value store persisted as a single JSON object on disk. The whole map
/// is rewritten on every set, matching the whole-value replacement contract.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(error = %err, path = %path.display(), "discarding unreadable state file");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StoreError::ReadFailed(err.to_string())),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens the store at the platform's local data directory.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| StoreError::ReadFailed("no local data directory".to_string()))?;
        Self::open(base.join("plaint").join("state.json"))
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("state map poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("state map poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("state map poisoned");
        entries.remove(key);
        self.persist(&entries)
    }
}
