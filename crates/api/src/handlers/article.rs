//! Handlers for the `/articles` resource.
//!
//! Every mutation answers with the freshly rendered table so the page can
//! redraw without a second request.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use folio_core::article::PUBLISH_SUCCESS_MESSAGE;
use folio_core::table::ArticleTable;
use folio_db::models::article::Article;
use folio_imgbb::ImageUpload;
use serde::{Deserialize, Serialize};

use crate::articles::writer::{publish_article, ArticleSubmission};
use crate::articles::{mutate, render};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{ConfirmParams, StatusFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body of a successful submission.
#[derive(Debug, Serialize)]
pub struct PublishResult {
    pub message: &'static str,
    pub article: Article,
    pub table: ArticleTable,
}

/// Response body of a status change or delete.
#[derive(Debug, Serialize)]
pub struct MutationResult {
    pub table: ArticleTable,
}

/// Body of `PATCH /articles/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// GET /api/v1/articles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> Json<DataResponse<ArticleTable>> {
    let table = render::render_articles(state.store.as_ref(), params.filter()).await;
    Json(DataResponse { data: table })
}

/// GET /api/v1/articles/table
///
/// Same listing as `list`, rendered as `<tbody>` markup.
pub async fn table_html(
    State(state): State<AppState>,
    Query(params): Query<StatusFilterParams>,
) -> Html<String> {
    let table = render::render_articles(state.store.as_ref(), params.filter()).await;
    Html(table.to_html())
}

/// POST /api/v1/articles
///
/// Accepts the article form as `multipart/form-data`.
pub async fn create(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PublishResult>>)> {
    let submission = read_submission(multipart).await?;
    let article = publish_article(
        state.store.as_ref(),
        state.image_host.as_ref(),
        user.map(|u| u.user_id),
        submission,
    )
    .await?;

    let table = render::render_articles(state.store.as_ref(), None).await;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PublishResult {
                message: PUBLISH_SUCCESS_MESSAGE,
                article,
                table,
            },
        }),
    ))
}

/// PATCH /api/v1/articles/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<MutationResult>>> {
    mutate::change_status(state.store.as_ref(), &id, &input.status).await?;
    let table = render::render_articles(state.store.as_ref(), None).await;
    Ok(Json(DataResponse {
        data: MutationResult { table },
    }))
}

/// DELETE /api/v1/articles/{id}?confirm=true
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ConfirmParams>,
) -> AppResult<Json<DataResponse<MutationResult>>> {
    mutate::delete_article(state.store.as_ref(), &id, params.confirm).await?;
    let table = render::render_articles(state.store.as_ref(), None).await;
    Ok(Json(DataResponse {
        data: MutationResult { table },
    }))
}

/// Collect the article form fields from a multipart body.
///
/// Unknown fields are ignored. An `article_photo` part with no content is
/// treated as "no file chosen".
async fn read_submission(mut multipart: Multipart) -> AppResult<ArticleSubmission> {
    let mut submission = ArticleSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "article_photo" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !bytes.is_empty() {
                    submission.photo_file = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "project_id" | "article_type" | "article_description" | "article_status"
            | "article_photo_url" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "project_id" => submission.project_id = Some(value),
                    "article_type" => submission.article_type = value,
                    "article_description" => submission.article_description = value,
                    "article_status" => submission.article_status = Some(value),
                    _ => submission.photo_url = Some(value),
                }
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown article form field");
            }
        }
    }

    Ok(submission)
}
