//! Test doubles for the store and image host.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use folio_core::types::DocId;
use folio_db::{Document, DocumentStore, MemoryDocumentStore, StoreError};
use folio_imgbb::{ImageHost, ImageUpload, UploadError};

/// In-memory store that counts writes and can be told to fail scans.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryDocumentStore,
    writes: AtomicUsize,
    fail_list: AtomicBool,
}

impl RecordingStore {
    /// Number of create/update/delete calls seen.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.inner.list(collection).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.inner.get(collection, id).await
    }

    async fn create(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<DocId, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.create(collection, data).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update(collection, id, patch).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(collection, id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Image host that returns a fixed URL or a fixed HTTP failure.
pub struct FakeImageHost {
    result: Result<String, u16>,
    calls: AtomicUsize,
}

impl FakeImageHost {
    pub fn succeeding(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, _image: ImageUpload) -> Result<String, UploadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(UploadError::HttpStatus)
    }
}
