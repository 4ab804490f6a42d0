use axum::extract::{Path, State};
use axum::response::Html;
use minijinja::context;
use sea_orm::DbErr;
use tracing::instrument;

use crate::error::{OrMissing, PageError};
use crate::models::group::Group;
use crate::models::submission::{SubmissionFilter, SubmissionSummary};
use crate::services::{catalog, scoreboard, submissions};
use crate::state::AppState;

use super::render;

/// Submissions by the group's users matching `filter`.
///
/// A group without resolvable users has no submissions; an empty user list
/// would otherwise mean "everyone".
async fn group_submissions(
    state: &AppState,
    group: &Group,
    filter: SubmissionFilter,
) -> Result<Vec<SubmissionSummary>, DbErr> {
    if group.users.is_empty() {
        return Ok(vec![]);
    }
    let filter = filter.users(group.users.iter().map(|u| u.username.clone()));
    submissions::filter_submissions(&state.db, &filter, state.hard_limit()).await
}

#[instrument(skip(state))]
pub async fn scoreboard(
    State(state): State<AppState>,
    Path(group_name): Path<String>,
) -> Result<Html<String>, PageError> {
    let group = state
        .groups
        .resolve(&state.db, &group_name)
        .await?
        .or_missing("Group does not exist.")?;

    let marks = scoreboard::group_scores(&state.db, group).await?;

    render(&state, "group_scoreboard.html", context! { group => marks })
}

#[instrument(skip(state))]
pub async fn subs(
    State(state): State<AppState>,
    Path(group_name): Path<String>,
) -> Result<Html<String>, PageError> {
    let group = state
        .groups
        .resolve(&state.db, &group_name)
        .await?
        .or_missing("Group does not exist.")?;

    let subs = group_submissions(&state, &group, SubmissionFilter::default()).await?;

    render(&state, "group_subs.html", context! { group => group, subs => subs })
}

/// Group users' submissions to any problem, in the group's sets or not.
#[instrument(skip(state))]
pub async fn problem(
    State(state): State<AppState>,
    Path((group_name, problem_name)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let group = state.groups.resolve(&state.db, &group_name).await?;
    let problem = catalog::get_problem(&state.db, &problem_name).await?;
    let (group, problem) = group
        .zip(problem)
        .or_missing("Group or problem does not exist.")?;

    let filter = SubmissionFilter::default().problems([problem.name.clone()]);
    let subs = group_submissions(&state, &group, filter).await?;

    render(
        &state,
        "group_problem.html",
        context! { group => group, problem => problem, subs => subs },
    )
}

/// Group users' submissions to any set, in the group or not.
#[instrument(skip(state))]
pub async fn set(
    State(state): State<AppState>,
    Path((group_name, set_name)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let group = state.groups.resolve(&state.db, &group_name).await?;
    let set = catalog::get_set(&state.db, &set_name).await?;
    let (group, set) = group.zip(set).or_missing("Group or set does not exist.")?;

    let filter = SubmissionFilter::default().sets([set.brief.name.clone()]);
    let subs = group_submissions(&state, &group, filter).await?;

    render(
        &state,
        "group_set.html",
        context! { group => group, pset => set, subs => subs },
    )
}
