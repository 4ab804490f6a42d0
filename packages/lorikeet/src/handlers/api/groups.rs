use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::group::GroupMarks;
use crate::services::scoreboard;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/groups/{name}/scoreboard",
    tag = "Groups",
    operation_id = "getGroupScoreboard",
    summary = "Get a group's scoreboard",
    description = "`marks[i][j]` is user `j` on set `i`. A `null` mark means the user has not attempted any problem of the set.",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Group marks", body = GroupMarks),
        (status = 404, description = "Group not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_scoreboard(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GroupMarks>, AppError> {
    let group = state
        .groups
        .resolve(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound("Group does not exist.".into()))?;
    Ok(Json(scoreboard::group_scores(&state.db, group).await?))
}
