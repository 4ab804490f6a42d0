use axum::Json;
use axum::extract::{Query, State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::problem::ProblemSearchResult;
use crate::models::problem_set::ProblemSetBrief;
use crate::models::shared::SearchQuery;
use crate::models::user::User;
use crate::services::search;
use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProblemSearchResponse {
    pub problems: Vec<ProblemSearchResult>,
    pub sets: Vec<ProblemSetBrief>,
}

#[utoipa::path(
    get,
    path = "/search/users",
    tag = "Search",
    operation_id = "searchUsers",
    summary = "Search users",
    description = "Case-insensitive substring match on username, first name, last name and full name. `%` and `_` match literally.",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn search_users(
    State(state): State<AppState>,
    Query(SearchQuery { query }): Query<SearchQuery>,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(search::search_users(&state.db, &query).await?))
}

#[utoipa::path(
    get,
    path = "/search/problems",
    tag = "Search",
    operation_id = "searchProblems",
    summary = "Search problems and sets",
    description = "Case-insensitive substring match on problem and set names and titles.",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching problems and sets", body = ProblemSearchResponse),
        (status = 500, description = "Internal error (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn search_problems(
    State(state): State<AppState>,
    Query(SearchQuery { query }): Query<SearchQuery>,
) -> Result<Json<ProblemSearchResponse>, AppError> {
    let problems = search::search_problems(&state.db, &query).await?;
    let sets = search::search_sets(&state.db, &query).await?;
    Ok(Json(ProblemSearchResponse { problems, sets }))
}
