//! Injected key-value persistence.
//!
//! The original dashboard reached for ambient browser storage to remember
//! banner dismissal. Here the store is an explicit dependency handed to the
//! app, so core logic tests never touch the filesystem. Two scopes exist:
//! session (in-memory, gone on exit) and durable (a JSON file under the
//! data dir).

use crate::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Key under which banner dismissal is recorded.
pub const BANNER_DISMISSED_KEY: &str = "notification_banner_hidden";

/// A small string-to-string store.
pub trait KvStore: Send {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Session-scoped store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Durable store backed by a JSON file.
///
/// The whole map is rewritten on every set; the data volume here is a
/// handful of flags, not a database.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open (or create) the store at the default location under the data dir.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(crate::config::data_dir()?.join("storage.json")))
    }

    /// Open (or create) the store at `path`. A missing or unreadable file
    /// starts empty rather than failing; losing a dismissal flag is cheaper
    /// than refusing to start.
    pub fn open(path: PathBuf) -> Self {
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "1").unwrap();
        assert_eq!(store.get("k"), Some("1".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "botdeck-store-test-{}.json",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(path.clone());
        store.set(BANNER_DISMISSED_KEY, "1").unwrap();
        drop(store);

        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get(BANNER_DISMISSED_KEY), Some("1".to_string()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_garbage() {
        let path = std::env::temp_dir().join(format!(
            "botdeck-store-garbage-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(path.clone());
        assert_eq!(store.get("anything"), None);

        let _ = std::fs::remove_file(&path);
    }
}
