//! Shared helpers for the endpoint tests: each test gets its own
//! tempdir-backed store so tests can run in parallel without sharing a file.

use actix_web::web;
use asset_management_server::{AppState, FileStore};
use tempfile::TempDir;

pub struct TestState {
    pub state: web::Data<AppState>,
    // Held so the backing file outlives the test body.
    _dir: TempDir,
}

pub fn test_state() -> TestState {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let path = dir.path().join("assets.json");
    TestState {
        state: web::Data::new(AppState {
            store: FileStore::new(path),
        }),
        _dir: dir,
    }
}
