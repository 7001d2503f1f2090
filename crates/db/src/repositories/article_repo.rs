//! Repository for the `articles` collection.

use folio_core::article::ArticleStatus;

use crate::models::article::{Article, ArticleStatusPatch, NewArticle};
use crate::models::ARTICLES;
use crate::store::{DocumentStore, StoreError};

/// Provides create/read/status-update/delete operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the stored document.
    ///
    /// `article_created_at` and `article_updated_at` are both set to the same
    /// instant.
    pub async fn create(
        store: &dyn DocumentStore,
        input: NewArticle,
    ) -> Result<Article, StoreError> {
        let fields = input.into_fields(chrono::Utc::now());
        let data = serde_json::to_value(&fields)?;
        let id = store.create(ARTICLES, data).await?;
        tracing::debug!(article_id = %id, project_id = %fields.project_id, "Article created");
        Ok(Article { id, fields })
    }

    /// Every decodable article, in insertion order.
    ///
    /// A document that cannot be read as an article is logged and skipped so
    /// one bad record does not hide the rest of the collection.
    pub async fn list(store: &dyn DocumentStore) -> Result<Vec<Article>, StoreError> {
        let docs = store.list(ARTICLES).await?;
        Ok(docs
            .into_iter()
            .filter_map(|doc| {
                let id = doc.id.clone();
                match Article::try_from(doc) {
                    Ok(article) => Some(article),
                    Err(e) => {
                        tracing::warn!(article_id = %id, error = %e, "Skipping undecodable article");
                        None
                    }
                }
            })
            .collect())
    }

    /// Find an article by id.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Option<Article>, StoreError> {
        match store.get(ARTICLES, id).await? {
            Some(doc) => Ok(Some(Article::try_from(doc)?)),
            None => Ok(None),
        }
    }

    /// Set the status and refresh `article_updated_at`.
    ///
    /// Fails with [`StoreError::NotFound`] if the article does not exist.
    pub async fn update_status(
        store: &dyn DocumentStore,
        id: &str,
        status: ArticleStatus,
    ) -> Result<(), StoreError> {
        let patch = ArticleStatusPatch {
            article_status: status,
            article_updated_at: chrono::Utc::now(),
        };
        store
            .update(ARTICLES, id, serde_json::to_value(&patch)?)
            .await?;
        tracing::debug!(article_id = %id, status = %status, "Article status updated");
        Ok(())
    }

    /// Delete an article. No existence check is made.
    pub async fn delete(store: &dyn DocumentStore, id: &str) -> Result<(), StoreError> {
        store.delete(ARTICLES, id).await?;
        tracing::debug!(article_id = %id, "Article deleted");
        Ok(())
    }
}
