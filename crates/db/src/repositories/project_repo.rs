//! Read-only repository for the `projects` collection.

use std::collections::{BTreeSet, HashMap};

use futures::future::join_all;

use crate::models::project::Project;
use crate::models::PROJECTS;
use crate::store::{DocumentStore, StoreError};

/// Provides lookups on projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Every project, in insertion order.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Project>, StoreError> {
        store
            .list(PROJECTS)
            .await?
            .into_iter()
            .map(|doc| Project::try_from(doc).map_err(StoreError::from))
            .collect()
    }

    /// Find a project by id.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Project>, StoreError> {
        match store.get(PROJECTS, id).await? {
            Some(doc) => Ok(Some(Project::try_from(doc)?)),
            None => Ok(None),
        }
    }

    /// Resolve project titles for a set of ids.
    ///
    /// Each distinct, non-empty id is looked up once and all lookups are
    /// awaited together. Ids that do not exist or whose lookup fails are
    /// absent from the result.
    pub async fn find_titles<'a, I>(store: &dyn DocumentStore, ids: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = ids.into_iter().filter(|id| !id.is_empty()).collect();

        let lookups = distinct.into_iter().map(|id| async move {
            match Self::find_by_id(store, id).await {
                Ok(Some(project)) => Some((project.id, project.title)),
                Ok(None) => {
                    tracing::debug!(project_id = %id, "Referenced project does not exist");
                    None
                }
                Err(e) => {
                    tracing::warn!(project_id = %id, error = %e, "Project lookup failed");
                    None
                }
            }
        });

        join_all(lookups).await.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use folio_core::types::DocId;
    use serde_json::json;

    use super::*;
    use crate::store::{Document, MemoryDocumentStore};

    /// Counts `get` calls on top of an in-memory store.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryDocumentStore,
        gets: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for CountingStore {
        async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
            self.inner.list(collection).await
        }
        async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get(collection, id).await
        }
        async fn create(
            &self,
            collection: &str,
            data: serde_json::Value,
        ) -> Result<DocId, StoreError> {
            self.inner.create(collection, data).await
        }
        async fn update(
            &self,
            collection: &str,
            id: &str,
            patch: serde_json::Value,
        ) -> Result<(), StoreError> {
            self.inner.update(collection, id, patch).await
        }
        async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
            self.inner.delete(collection, id).await
        }
        async fn health_check(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn find_titles_looks_up_each_distinct_id_once() {
        let store = CountingStore::default();
        store
            .inner
            .insert_with_id(PROJECTS, "p1", json!({"title": "Harbor"}))
            .await
            .unwrap();
        store
            .inner
            .insert_with_id(PROJECTS, "p2", json!({"title": "Bridge"}))
            .await
            .unwrap();

        let titles =
            ProjectRepo::find_titles(&store, ["p1", "p2", "p1", "p1", ""]).await;

        assert_eq!(store.gets.load(Ordering::SeqCst), 2);
        assert_eq!(titles.get("p1").map(String::as_str), Some("Harbor"));
        assert_eq!(titles.get("p2").map(String::as_str), Some("Bridge"));
    }

    #[tokio::test]
    async fn find_titles_skips_dangling_ids() {
        let store = MemoryDocumentStore::new();
        let titles = ProjectRepo::find_titles(&store, ["ghost"]).await;
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn list_projects() {
        let store = MemoryDocumentStore::new();
        store
            .insert_with_id(PROJECTS, "p1", json!({"title": "Harbor", "budget": 10}))
            .await
            .unwrap();
        let projects = ProjectRepo::list(&store).await.unwrap();
        assert_eq!(
            projects,
            vec![Project {
                id: "p1".into(),
                title: "Harbor".into()
            }]
        );
    }
}
