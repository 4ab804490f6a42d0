use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::problem::ProblemDetail;
use crate::services::{catalog, stats};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/problems/{name}",
    tag = "Problems",
    operation_id = "getProblem",
    summary = "Get a problem with its statistics",
    description = "Returns the problem, its solve and submission counts, and the sets that contain it.",
    params(("name" = String, Path, description = "Problem name")),
    responses(
        (status = 200, description = "Problem details", body = ProblemDetail),
        (status = 404, description = "Problem not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_problem(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProblemDetail>, AppError> {
    let problem = catalog::get_problem(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Problem does not exist".into()))?;
    let stats = stats::problem_stats(&state.db, problem.id).await?;
    let sets = catalog::sets_containing_problem(&state.db, problem.id).await?;

    Ok(Json(ProblemDetail {
        problem,
        stats,
        sets,
    }))
}
