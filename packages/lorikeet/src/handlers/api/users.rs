use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::submission::Submission;
use crate::models::user::User;
use crate::services::{catalog, submissions};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    operation_id = "getUser",
    summary = "Get a user by username",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = catalog::get_user(&state.db, &username)
        .await?
        .ok_or_else(|| AppError::NotFound("User does not exist".into()))?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/users/{username}/problems/{problem}/attempts/{attempt}",
    tag = "Users",
    operation_id = "getAttempt",
    summary = "Get one attempt with its source",
    description = "`attempt` is 1-based. Negative values count back from the latest attempt, so `-1` is the most recent one.",
    params(
        ("username" = String, Path, description = "Username"),
        ("problem" = String, Path, description = "Problem name"),
        ("attempt" = i64, Path, description = "Attempt number"),
    ),
    responses(
        (status = 200, description = "Submission with source", body = Submission),
        (status = 404, description = "Attempt not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_attempt(
    State(state): State<AppState>,
    Path((username, problem, attempt)): Path<(String, String, String)>,
) -> Result<Json<Submission>, AppError> {
    let sub = submissions::get_submission(&state.db, &username, &problem, &attempt)
        .await?
        .ok_or_else(|| AppError::NotFound("Attempt doesn't exist.".into()))?;
    Ok(Json(sub))
}
