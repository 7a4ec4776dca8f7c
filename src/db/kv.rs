use std::{collections::HashMap, path::PathBuf, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Database;

const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Key of the settings blob.
pub const SETTINGS_KEY: &str = "settings";
/// Key of the behavior record blob.
pub const BEHAVIOR_KEY: &str = "behaviorData";

/// Asynchronous string blob storage keyed by name.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

#[async_trait]
impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.set_value(key, value).await
    }
}

/// Process-local store. Used when on-disk storage is unavailable, and in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.data.lock().await.len()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.data.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// Open the SQLite store at `path`, falling back to an in-memory store if
/// the database cannot be opened.
pub fn open_store(path: PathBuf) -> Arc<dyn KeyValueStore> {
    match Database::new(path) {
        Ok(db) => Arc::new(db),
        Err(err) => {
            log_warn!("persistent storage unavailable, using in-memory store: {err:#}");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get(SETTINGS_KEY).await.unwrap(), None);
        store.set(SETTINGS_KEY, "{}".into()).await.unwrap();
        store.set(SETTINGS_KEY, "{\"a\":1}".into()).await.unwrap();
        assert_eq!(store.get(SETTINGS_KEY).await.unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn open_store_uses_sqlite_when_possible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabsense.sqlite3");
        let store = open_store(path.clone());
        store.set(BEHAVIOR_KEY, "{}".into()).await.unwrap();
        drop(store);

        assert!(path.exists());
    }

    #[tokio::test]
    async fn open_store_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let store = open_store(dir.path().to_path_buf());
        store.set(BEHAVIOR_KEY, "{}".into()).await.unwrap();
        assert_eq!(store.get(BEHAVIOR_KEY).await.unwrap().as_deref(), Some("{}"));
    }
}
