//! Handlers for the `/projects` resource.
//!
//! Projects are owned by another system; the desk only lists them so the
//! article form can offer a project selector.

use axum::extract::State;
use axum::Json;
use folio_db::models::project::Project;
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(state.store.as_ref()).await?;
    Ok(Json(DataResponse { data: projects }))
}
