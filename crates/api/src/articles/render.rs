//! Article lister: full scan, client-side status filter, project-title join.
//!
//! The project titles are resolved with one batched lookup per distinct
//! project id and awaited before the table is returned. Rows whose project
//! does not exist keep the `"Loading..."` placeholder.

use std::collections::HashMap;

use folio_core::table::{
    filtered_empty_message, ArticleRow, ArticleTable, EMPTY_MESSAGE, FILTER_ERROR_MESSAGE,
    RENDER_ERROR_MESSAGE,
};
use folio_db::models::article::Article;
use folio_db::repositories::{ArticleRepo, ProjectRepo};
use folio_db::DocumentStore;

/// Build the article table, optionally restricted to one status value.
///
/// The filter compares the stored status string exactly and is applied after
/// fetching the whole collection. A failed scan yields the table's error
/// state instead of an error.
pub async fn render_articles(
    store: &dyn DocumentStore,
    status_filter: Option<&str>,
) -> ArticleTable {
    let articles = match ArticleRepo::list(store).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!(error = %e, filter = ?status_filter, "Failed to load articles");
            let message = if status_filter.is_some() {
                FILTER_ERROR_MESSAGE
            } else {
                RENDER_ERROR_MESSAGE
            };
            return ArticleTable::Error {
                message: message.to_string(),
            };
        }
    };

    let visible: Vec<Article> = match status_filter {
        Some(status) => articles
            .into_iter()
            .filter(|a| a.fields.article_status == status)
            .collect(),
        None => articles,
    };

    let titles =
        ProjectRepo::find_titles(store, visible.iter().map(|a| a.fields.project_id.as_str())).await;

    tracing::debug!(
        rows = visible.len(),
        projects_resolved = titles.len(),
        filter = ?status_filter,
        "Rendered article table"
    );

    let empty_message = match status_filter {
        Some(status) => filtered_empty_message(status),
        None => EMPTY_MESSAGE.to_string(),
    };
    ArticleTable::from_rows(build_rows(&visible, &titles), empty_message)
}

/// One row per article, with known project titles patched in.
fn build_rows(articles: &[Article], titles: &HashMap<String, String>) -> Vec<ArticleRow> {
    articles
        .iter()
        .map(|article| {
            let fields = &article.fields;
            let mut row = ArticleRow::new(
                article.id.clone(),
                fields.article_type.clone(),
                &fields.article_description,
                fields.article_photo_url.clone(),
                fields.article_status.clone(),
            );
            if let Some(title) = titles.get(&fields.project_id) {
                row.set_project_title(title.clone());
            }
            row
        })
        .collect()
}
