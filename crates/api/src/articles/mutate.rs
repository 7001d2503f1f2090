//! Status changes and deletes on a single article.

use folio_core::article::{ArticleStatus, DELETE_CONFIRM_PROMPT};
use folio_core::error::CoreError;
use folio_db::repositories::ArticleRepo;
use folio_db::DocumentStore;

use crate::error::AppResult;

/// Set an article's status from a raw value.
///
/// The value must name one of the three statuses; anything else is rejected
/// before the store is touched. A missing article surfaces as a store
/// `NotFound` error.
pub async fn change_status(
    store: &dyn DocumentStore,
    id: &str,
    raw_status: &str,
) -> AppResult<()> {
    let status: ArticleStatus = raw_status.parse()?;
    ArticleRepo::update_status(store, id, status).await?;
    tracing::info!(article_id = %id, %status, "Article status changed");
    Ok(())
}

/// Delete an article once the caller has confirmed.
///
/// Without confirmation nothing happens and the confirmation prompt is
/// returned as an error. With confirmation the delete is unconditional.
pub async fn delete_article(
    store: &dyn DocumentStore,
    id: &str,
    confirmed: bool,
) -> AppResult<()> {
    if !confirmed {
        return Err(CoreError::ConfirmationRequired(DELETE_CONFIRM_PROMPT.into()).into());
    }
    ArticleRepo::delete(store, id).await?;
    tracing::info!(article_id = %id, "Article deleted");
    Ok(())
}
