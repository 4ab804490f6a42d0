//! HTTP handlers: server-rendered pages and the JSON mirror under `/api/v1`.

pub mod api;
pub mod group;
pub mod pages;
pub mod search;

use axum::response::Html;
use serde::Serialize;

use crate::error::PageError;
use crate::state::AppState;

/// Render a page template into an HTML response.
fn render<S: Serialize>(state: &AppState, name: &str, ctx: S) -> Result<Html<String>, PageError> {
    Ok(Html(state.views.render(name, ctx)?))
}
