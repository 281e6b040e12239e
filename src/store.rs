//! File-backed persistence for the asset collection.
//!
//! The whole collection lives in one JSON file as a top-level array. Every
//! mutation rewrites the file; `lock()` serializes the load-mutate-persist
//! cycle so concurrent writers cannot clobber each other's changes.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::asset::models::Asset;

/// Shared application state handed to every handler.
pub struct AppState {
    pub store: FileStore,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access asset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub struct FileStore {
    path: PathBuf,
    next_id: AtomicI64,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Creates a store over `path`. The id sequence is seeded from the
    /// current Unix time in milliseconds so ids keep the magnitude existing
    /// clients expect, while `fetch_add` keeps them collision-free.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_id: AtomicI64::new(chrono::Utc::now().timestamp_millis()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Guards the whole load-mutate-persist cycle. Mutating handlers must
    /// hold this across both calls or two requests can race and the second
    /// persist silently drops the first one's changes.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Creates the backing file with an empty collection if it is absent.
    pub async fn init(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            tokio::fs::write(&self.path, "[]").await?;
            log::info!("Created {}", self.path.display());
        }
        Ok(())
    }

    /// Reads the full collection. A missing file is initialized to an empty
    /// collection; an unreadable or unparseable file is an error the caller
    /// surfaces as a 500 rather than a silently empty collection.
    pub async fn load(&self) -> Result<Vec<Asset>, StoreError> {
        if !self.path.exists() {
            self.init().await?;
            return Ok(Vec::new());
        }
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let assets = serde_json::from_str(&contents)?;
        Ok(assets)
    }

    /// Rewrites the backing file with the full collection, pretty-printed.
    /// The write is not atomic: a crash mid-write can truncate the file.
    pub async fn persist(&self, assets: &[Asset]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(assets)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let store = FileStore::new("unused.json");
        let mut last = store.next_id();
        for _ in 0..1000 {
            let id = store.next_id();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn id_seed_has_millisecond_epoch_magnitude() {
        let store = FileStore::new("unused.json");
        // 2020-01-01 in ms; anything after is fine.
        assert!(store.next_id() > 1_577_836_800_000);
    }

    #[tokio::test]
    async fn load_initializes_missing_file_to_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        let store = FileStore::new(&path);

        let assets = store.load().await.unwrap();
        assert!(assets.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn load_surfaces_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        std::fs::write(&path, "{ not an array ").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load().await, Err(StoreError::Parse(_))));
    }

    #[tokio::test]
    async fn persist_writes_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        let store = FileStore::new(&path);

        let asset: Asset = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Server1", "type": "Hardware"
        }))
        .unwrap();
        store.persist(&[asset]).await.unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.starts_with("[\n  {"));
        assert!(on_disk.contains("\"name\": \"Server1\""));

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, 1);
    }
}
