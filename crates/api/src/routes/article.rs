//! Route definitions for the `/articles` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                 -> list          (?status=)
/// POST   /                 -> create        (multipart form, photo upload)
/// GET    /table            -> table_html    (?status=)
/// DELETE /{id}             -> delete        (?confirm=true)
/// PATCH  /{id}/status      -> update_status
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(article::list)
                .post(article::create)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/table", get(article::table_html))
        .route("/{id}", delete(article::delete))
        .route("/{id}/status", patch(article::update_status))
}
