pub mod article;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list
///
/// /articles                                        list (?status=), create (multipart)
/// /articles/table                                  list as <tbody> markup (?status=)
/// /articles/{id}                                   delete (?confirm=true)
/// /articles/{id}/status                            update status (PATCH)
/// ```
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/articles", article::router(state.config.max_upload_bytes))
}
