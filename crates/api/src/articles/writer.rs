//! Article writer: one form submission becomes one article document.
//!
//! Nothing is written unless every step before the store call succeeds. A
//! failed upload aborts the submission and no partial article is created.

use folio_core::article::{
    resolve_photo_source, validate_project_selection, ArticleStatus, PhotoSource,
};
use folio_core::error::CoreError;
use folio_db::models::article::{Article, NewArticle};
use folio_db::repositories::ArticleRepo;
use folio_db::DocumentStore;
use folio_imgbb::{ImageHost, ImageUpload};

use crate::error::AppResult;

/// Raw form values of an article submission.
#[derive(Debug, Clone, Default)]
pub struct ArticleSubmission {
    pub project_id: Option<String>,
    pub article_type: String,
    pub article_description: String,
    pub article_status: Option<String>,
    /// URL typed into the form; ignored when a file is attached.
    pub photo_url: Option<String>,
    /// Attached image file.
    pub photo_file: Option<ImageUpload>,
}

/// Validate and persist a submission on behalf of `user_id`.
///
/// The project selection and status are checked before any network call.
/// An attached file is uploaded to `image_host` and takes priority over a
/// typed URL. Both timestamps are set to the same instant.
pub async fn publish_article(
    store: &dyn DocumentStore,
    image_host: &dyn ImageHost,
    user_id: Option<String>,
    submission: ArticleSubmission,
) -> AppResult<Article> {
    let ArticleSubmission {
        project_id,
        article_type,
        article_description,
        article_status,
        photo_url,
        photo_file,
    } = submission;

    let project_id = validate_project_selection(project_id.as_deref())?.to_string();

    let status: ArticleStatus = article_status
        .as_deref()
        .ok_or_else(|| CoreError::Validation("Article status is required".into()))?
        .parse()?;

    let photo_url = match resolve_photo_source(photo_file.is_some(), photo_url.as_deref()) {
        PhotoSource::Upload => match photo_file {
            Some(file) => Some(image_host.upload(file).await?),
            None => None,
        },
        PhotoSource::Url(url) => Some(url.to_string()),
        PhotoSource::None => None,
    };

    let article = ArticleRepo::create(
        store,
        NewArticle {
            project_id,
            user_id,
            article_type,
            article_description,
            article_photo_url: photo_url,
            article_status: status,
        },
    )
    .await?;

    tracing::info!(
        article_id = %article.id,
        project_id = %article.fields.project_id,
        status = %article.fields.article_status,
        has_photo = article.fields.article_photo_url.is_some(),
        "Article published"
    );
    Ok(article)
}
