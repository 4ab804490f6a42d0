use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::submission::{SubmissionFilter, SubmissionListQuery, SubmissionListResponse};
use crate::services::submissions;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/submissions",
    tag = "Submissions",
    operation_id = "listSubmissions",
    summary = "List recent submissions",
    description = "Returns the newest submissions, capped at the configured hard limit. `users`, `sets` and `problems` take comma-separated names. Users restrict by author; sets and problems restrict to the union of the problems they name. Unknown names match nothing.",
    params(SubmissionListQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = SubmissionListResponse),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<Json<SubmissionListResponse>, AppError> {
    let filter = SubmissionFilter::from(query);
    let limit = state.hard_limit();
    let data = submissions::filter_submissions(&state.db, &filter, limit).await?;

    Ok(Json(SubmissionListResponse { data, limit }))
}
