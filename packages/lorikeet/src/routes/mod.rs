use axum::Router;
use axum::routing::{MethodRouter, get};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{api, group, pages, search};
use crate::state::AppState;

/// Register `path` and `path/` with the same handler.
fn route_both(router: Router<AppState>, path: &str, method: MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(path, method.clone())
        .route(&format!("{path}/"), method)
}

fn page_router() -> Router<AppState> {
    let router = Router::new().route("/", get(pages::index));

    [
        ("/user/{username}", get(pages::user_page)),
        ("/problem/{name}", get(pages::problem_page)),
        ("/set/{name}", get(pages::set_page)),
        ("/user/{username}/problem/{problem}", get(pages::user_problem)),
        ("/user/{username}/set/{set}", get(pages::user_set)),
        (
            "/user/{username}/problem/{problem}/{attempt}",
            get(pages::user_problem_attempt),
        ),
        (
            "/user/{username}/problem/{problem}/{attempt}/extract",
            get(pages::user_problem_attempt_extract),
        ),
        ("/group/{group}/scoreboard", get(group::scoreboard)),
        ("/group/{group}/subs", get(group::subs)),
        ("/group/{group}/problem/{problem}", get(group::problem)),
        ("/group/{group}/set/{set}", get(group::set)),
        ("/search/user", get(search::search_user)),
        ("/search/problem", get(search::search_problem)),
        ("/search/handle", get(search::search_handle)),
    ]
    .into_iter()
    .fold(router, |router, (path, method)| route_both(router, path, method))
}

/// HTML pages, served at the root and, when configured, under the proxy mount point.
pub fn page_routes(mount_point: &str) -> Router<AppState> {
    if mount_point.is_empty() {
        return page_router();
    }
    page_router()
        .route(&format!("{mount_point}/"), get(pages::index))
        .nest(mount_point, page_router())
}

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/v1", v1_routes())
}

fn v1_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(api::submissions::list_submissions))
        .routes(routes!(api::users::get_user))
        .routes(routes!(api::users::get_attempt))
        .routes(routes!(api::problems::get_problem))
        .routes(routes!(api::sets::get_set))
        .routes(routes!(api::groups::get_scoreboard))
        .routes(routes!(api::search::search_users))
        .routes(routes!(api::search::search_problems))
}
