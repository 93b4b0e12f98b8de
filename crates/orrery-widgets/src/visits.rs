//! Visit counter persisted in a small string key-value store.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Errors from a persistent key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings.
    #[error("store is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-to-string storage that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let entries = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "opened key-value store");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

/// Counts page loads under a single key.
#[derive(Debug)]
pub struct VisitCounter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> VisitCounter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Current count; a missing key reads as 0.
    ///
    /// A value that is not a non-negative integer also reads as 0.
    pub fn count(&self) -> Result<u64, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(0);
        };
        Ok(raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = %self.key, value = %raw, "corrupt visit count; restarting at 0");
            0
        }))
    }

    /// Increment and persist the count, returning the new value.
    pub fn record_visit(&mut self) -> Result<u64, StoreError> {
        let next = self.count()?.saturating_add(1);
        self.store.set(&self.key, &next.to_string())?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "demo_site_visits_v1";

    #[test]
    fn test_fresh_key_reads_zero() {
        let counter = VisitCounter::new(MemoryStore::default(), KEY);
        assert_eq!(counter.count().unwrap(), 0);
    }

    #[test]
    fn test_k_visits_read_back_k() {
        let mut counter = VisitCounter::new(MemoryStore::default(), KEY);
        for k in 1..=7 {
            assert_eq!(counter.record_visit().unwrap(), k);
        }
        assert_eq!(counter.count().unwrap(), 7);
    }

    #[test]
    fn test_corrupt_value_restarts_at_zero() {
        let mut store = MemoryStore::default();
        store.set(KEY, "lots").unwrap();
        let mut counter = VisitCounter::new(store, KEY);
        assert_eq!(counter.count().unwrap(), 0);
        assert_eq!(counter.record_visit().unwrap(), 1);
    }

    #[test]
    fn test_file_store_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        for expected in 1..=3 {
            let store = FileStore::open(&path).unwrap();
            let mut counter = VisitCounter::new(store, KEY);
            assert_eq!(counter.record_visit().unwrap(), expected);
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        let mut counter = VisitCounter::new(store, KEY);
        counter.record_visit().unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Json(_))));
    }
}
