use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, Response};
use minijinja::context;
use tracing::instrument;

use crate::error::{AppError, OrMissing, PageError};
use crate::models::submission::SubmissionFilter;
use crate::services::{catalog, scoreboard, stats, submissions};
use crate::state::AppState;
use crate::utils::filename::{
    content_disposition_value, content_type, decode_source, download_filename,
};

use super::render;

const ATTEMPT_MISSING: &str = "Attempt doesn't exist.";

/// Latest submissions across the whole site.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let subs =
        submissions::filter_submissions(&state.db, &SubmissionFilter::default(), state.hard_limit())
            .await?;
    let groups: Vec<&str> = state.groups.names().collect();

    render(&state, "index.html", context! { subs => subs, groups => groups })
}

#[instrument(skip(state))]
pub async fn user_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Html<String>, PageError> {
    let user = catalog::get_user(&state.db, &username)
        .await?
        .or_missing("User does not exist")?;

    let filter = SubmissionFilter::default().users([user.username.clone()]);
    let subs = submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await?;

    render(&state, "user_page.html", context! { user => user, subs => subs })
}

#[instrument(skip(state))]
pub async fn problem_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let problem = catalog::get_problem(&state.db, &name)
        .await?
        .or_missing("Problem does not exist")?;

    let filter = SubmissionFilter::default().problems([problem.name.clone()]);
    let subs = submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await?;
    let stats = stats::problem_stats(&state.db, problem.id).await?;
    let sets = catalog::sets_containing_problem(&state.db, problem.id).await?;

    render(&state, "problem_page.html", context! { problem => problem, subs => subs, stats => stats, sets => sets })
}

#[instrument(skip(state))]
pub async fn set_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let set = catalog::get_set(&state.db, &name)
        .await?
        .or_missing("Set does not exist")?;

    let filter = SubmissionFilter::default().sets([set.brief.name.clone()]);
    let subs = submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await?;

    render(&state, "set_page.html", context! { pset => set, subs => subs })
}

#[instrument(skip(state))]
pub async fn user_problem(
    State(state): State<AppState>,
    Path((username, problem_name)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let user = catalog::get_user(&state.db, &username).await?;
    let problem = catalog::get_problem(&state.db, &problem_name).await?;
    let (user, problem) = user
        .zip(problem)
        .or_missing("User or problem does not exist")?;

    let filter = SubmissionFilter::default()
        .users([user.username.clone()])
        .problems([problem.name.clone()]);
    let subs = submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await?;
    let num_attempts = submissions::count_attempts(&state.db, user.id, problem.id).await?;

    render(
        &state,
        "user_problem.html",
        context! { user => user, problem => problem, subs => subs, num_attempts => num_attempts },
    )
}

#[instrument(skip(state))]
pub async fn user_set(
    State(state): State<AppState>,
    Path((username, set_name)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let user = catalog::get_user(&state.db, &username).await?;
    let set = catalog::get_set(&state.db, &set_name).await?;
    let (user, set) = user.zip(set).or_missing("User or set does not exist")?;

    let filter = SubmissionFilter::default()
        .users([user.username.clone()])
        .sets([set.brief.name.clone()]);
    let subs = submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await?;
    let scores = scoreboard::set_scores(&state.db, std::slice::from_ref(&user), &set)
        .await?
        .pop();

    render(&state, "user_set.html", context! { user => user, pset => set, subs => subs, scores => scores })
}

#[instrument(skip(state))]
pub async fn user_problem_attempt(
    State(state): State<AppState>,
    Path((username, problem_name, attempt)): Path<(String, String, String)>,
) -> Result<Html<String>, PageError> {
    let sub = submissions::get_submission(&state.db, &username, &problem_name, &attempt)
        .await?
        .or_missing(ATTEMPT_MISSING)?;

    render(&state, "submission.html", context! { sub => sub })
}

/// Download the source of an attempt as a file.
#[instrument(skip(state))]
pub async fn user_problem_attempt_extract(
    State(state): State<AppState>,
    Path((username, problem_name, attempt)): Path<(String, String, String)>,
) -> Result<Response, PageError> {
    let sub = submissions::get_submission(&state.db, &username, &problem_name, &attempt)
        .await?
        .or_missing(ATTEMPT_MISSING)?;

    let body = decode_source(&sub.langid, &sub.source)
        .map_err(|e| AppError::Internal(format!("Failed to decode submission: {e}")))?;
    let filename = download_filename(
        &sub.summary.user.username,
        &sub.summary.problem.name,
        sub.summary.attempt,
        &sub.langid,
    );

    Response::builder()
        .header(header::CONTENT_TYPE, content_type(&sub.langid))
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_value(&filename),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")).into())
}
