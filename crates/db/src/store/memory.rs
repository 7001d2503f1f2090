//! In-process backend used for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use folio_core::types::DocId;
use tokio::sync::RwLock;

use super::{new_doc_id, require_object, Document, DocumentStore, StoreError};

/// Document store held entirely in memory. Collections keep insertion order.
///
/// It starts empty and has no way to load `projects`, so it is meant for tests
/// and throwaway local runs. Seeding helpers are available with the `testing`
/// feature.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a caller-chosen id, replacing any existing one.
    ///
    /// Used to seed collections owned by other systems (e.g. `projects`).
    #[cfg(any(test, feature = "testing"))]
    pub async fn insert_with_id(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<(), StoreError> {
        require_object(&data)?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|doc| doc.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(Document {
                id: id.to_string(),
                data,
            }),
        }
        Ok(())
    }

    /// Number of documents in `collection`.
    #[cfg(any(test, feature = "testing"))]
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned()))
    }

    async fn create(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<DocId, StoreError> {
        require_object(&data)?;
        let id = new_doc_id();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: serde_json::Value,
    ) -> Result<(), StoreError> {
        let fields = match patch {
            serde_json::Value::Object(fields) => fields,
            other => {
                return Err(StoreError::InvalidDocument(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };

        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        if let serde_json::Value::Object(data) = &mut doc.data {
            data.extend(fields);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(docs) = self.collections.write().await.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
