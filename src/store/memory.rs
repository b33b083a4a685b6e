use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::json;

use super::{ContentStore, RevisionToken, StoreError};
use crate::models::ProjectDocument;

/// In-process store with the same compare-and-swap contract as the remote
/// one. Used by the test suite and handy for local development without a
/// repository.
pub struct MemoryStore {
    inner: Mutex<ProjectDocument>,
    generation: AtomicU64,
    writes: AtomicU64,
    unavailable: AtomicBool,
    conflict_next: AtomicBool,
}

impl MemoryStore {
    pub fn new(document: ProjectDocument) -> Self {
        Self {
            inner: Mutex::new(document),
            generation: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            unavailable: AtomicBool::new(false),
            conflict_next: AtomicBool::new(false),
        }
    }

    /// Make subsequent reads and writes fail, as if the remote were down.
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::SeqCst);
    }

    /// Fail the next write with a conflict, as if another writer committed
    /// between this caller's read and its write.
    pub fn fail_next_put_with_conflict(&self) {
        self.conflict_next.store(true, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn document(&self) -> ProjectDocument {
        self.inner.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch(&self) -> Result<(ProjectDocument, RevisionToken), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "Database read failed: upstream returned 404 Not Found".to_string(),
            ));
        }
        let document = self.inner.lock().unwrap().clone();
        let token = self.generation.load(Ordering::SeqCst);
        Ok((document, RevisionToken(token.to_string())))
    }

    async fn put(
        &self,
        document: &ProjectDocument,
        token: &RevisionToken,
        message: &str,
    ) -> Result<serde_json::Value, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "Database write failed: upstream unavailable".to_string(),
            ));
        }

        let mut inner = self.inner.lock().unwrap();
        let live = self.generation.load(Ordering::SeqCst);
        if self.conflict_next.swap(false, Ordering::SeqCst) || token.0 != live.to_string() {
            return Err(StoreError::Conflict(
                "Database changed since it was read".to_string(),
            ));
        }

        *inner = document.clone();
        let next = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.writes.fetch_add(1, Ordering::SeqCst);

        Ok(json!({
            "commit": { "message": message },
            "content": { "sha": next.to_string() },
        }))
    }
}
