//! Collection-scoped document storage.
//!
//! A document is a JSON object stored under `(collection, id)`. Ids are
//! assigned by the store on create. Listing returns documents in insertion
//! order. There is no paging: a listing returns the whole collection.

mod memory;
mod postgres;

use async_trait::async_trait;
use folio_core::types::DocId;
use serde::Serialize;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A stored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub data: serde_json::Value,
}

/// Errors from any document store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Update target does not exist.
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// The backend database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A patch or document body was not a JSON object.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Create/read/update/delete and full scans on named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document in `collection`, in insertion order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// A single document, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Store a new document and return its assigned id.
    async fn create(&self, collection: &str, data: serde_json::Value)
        -> Result<DocId, StoreError>;

    /// Merge the top-level fields of `patch` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] if the document does not exist.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Ensure a document body or patch is a JSON object.
pub(crate) fn require_object(value: &serde_json::Value) -> Result<(), StoreError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {value}"
        )))
    }
}

/// Generate a new document id.
pub(crate) fn new_doc_id() -> DocId {
    uuid::Uuid::new_v4().simple().to_string()
}
