use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use serde::Deserialize;
use tracing::instrument;
use url::form_urlencoded;

use crate::error::PageError;
use crate::extractors::proxy::ProxyContext;
use crate::models::shared::SearchQuery;
use crate::services::search;
use crate::state::AppState;

use super::render;

/// Query string of the search box: the text plus whichever button was pressed.
#[derive(Debug, Default, Deserialize)]
pub struct HandleQuery {
    #[serde(default)]
    pub query: String,
    pub users: Option<String>,
    pub problems: Option<String>,
}

fn pressed(button: &Option<String>) -> bool {
    button.as_deref().is_some_and(|v| !v.is_empty())
}

#[instrument(skip(state))]
pub async fn search_user(
    State(state): State<AppState>,
    Query(SearchQuery { query }): Query<SearchQuery>,
) -> Result<Html<String>, PageError> {
    let users = search::search_users(&state.db, &query).await?;

    render(&state, "search_user.html", context! { query => query, users => users })
}

#[instrument(skip(state))]
pub async fn search_problem(
    State(state): State<AppState>,
    Query(SearchQuery { query }): Query<SearchQuery>,
) -> Result<Html<String>, PageError> {
    let problems = search::search_problems(&state.db, &query).await?;
    let sets = search::search_sets(&state.db, &query).await?;

    render(
        &state,
        "search_problem.html",
        context! { query => query, problems => problems, sets => sets },
    )
}

/// Send the search box to the user or problem results page.
#[instrument(skip(proxy))]
pub async fn search_handle(
    proxy: ProxyContext,
    Query(params): Query<HandleQuery>,
) -> Result<Response, PageError> {
    let target = if pressed(&params.users) {
        "/search/user"
    } else if pressed(&params.problems) {
        "/search/problem"
    } else {
        return Err(PageError::Missing("Invalid search query."));
    };

    let qs = form_urlencoded::Serializer::new(String::new())
        .append_pair("query", &params.query)
        .finish();

    Ok(Redirect::to(&proxy.url(&format!("{target}?{qs}"))).into_response())
}
