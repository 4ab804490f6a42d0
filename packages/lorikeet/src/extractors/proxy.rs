use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::state::AppState;

/// Header a fronting proxy sets to report the scheme the client used.
pub const SCHEME_HEADER: &str = "x-scheme";

/// Where the site is reachable from the client's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyContext {
    pub scheme: String,
    pub host: Option<String>,
    pub script_name: String,
}

impl ProxyContext {
    /// Absolute URL for a site path such as `/search/user`.
    ///
    /// Without a `Host` header the result is a path relative to the server root.
    pub fn url(&self, path: &str) -> String {
        match &self.host {
            Some(host) => format!("{}://{}{}{}", self.scheme, host, self.script_name, path),
            None => format!("{}{}", self.script_name, path),
        }
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl FromRequestParts<AppState> for ProxyContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let scheme = header_str(parts, SCHEME_HEADER)
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "http".to_string());
        let host = header_str(parts, header::HOST.as_str()).map(str::to_string);

        Ok(ProxyContext {
            scheme,
            host,
            script_name: state.config.server.mount_point(),
        })
    }
}
