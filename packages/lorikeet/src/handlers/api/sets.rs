use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::problem_set::ProblemSet;
use crate::services::catalog;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/sets/{name}",
    tag = "Sets",
    operation_id = "getSet",
    summary = "Get a set with its problems",
    params(("name" = String, Path, description = "Set name")),
    responses(
        (status = 200, description = "Set with problems", body = ProblemSet),
        (status = 404, description = "Set not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_set(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProblemSet>, AppError> {
    let set = catalog::get_set(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Set does not exist".into()))?;
    Ok(Json(set))
}
