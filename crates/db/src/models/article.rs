//! Article document model and DTOs.

use folio_core::article::ArticleStatus;
use folio_core::types::{DocId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::Document;

/// Stored fields of an article document.
///
/// Documents may be written by other clients of the store, so reads are
/// lenient: missing or `null` text fields decode as empty strings and
/// missing timestamps decode as `None`. `article_status` stays a plain string
/// because older documents may hold any value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub article_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub article_description: String,
    #[serde(default)]
    pub article_photo_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub article_status: String,
    #[serde(default)]
    pub article_created_at: Option<Timestamp>,
    #[serde(default)]
    pub article_updated_at: Option<Timestamp>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An article document with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: DocId,
    #[serde(flatten)]
    pub fields: ArticleFields,
}

impl TryFrom<Document> for Article {
    type Error = serde_json::Error;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        Ok(Article {
            id: doc.id,
            fields: serde_json::from_value(doc.data)?,
        })
    }
}

/// DTO for creating a new article. Timestamps are assigned on write.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub project_id: String,
    pub user_id: Option<String>,
    pub article_type: String,
    pub article_description: String,
    pub article_photo_url: Option<String>,
    pub article_status: ArticleStatus,
}

impl NewArticle {
    /// Stored fields with both timestamps set to `now`.
    pub fn into_fields(self, now: Timestamp) -> ArticleFields {
        ArticleFields {
            project_id: self.project_id,
            user_id: self.user_id,
            article_type: self.article_type,
            article_description: self.article_description,
            article_photo_url: self.article_photo_url,
            article_status: self.article_status.as_str().to_string(),
            article_created_at: Some(now),
            article_updated_at: Some(now),
        }
    }
}

/// Partial update written by the status mutator.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleStatusPatch {
    pub article_status: ArticleStatus,
    pub article_updated_at: Timestamp,
}
