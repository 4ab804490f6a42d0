use serde::Deserialize;

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a case-insensitive substring pattern for use with `ESCAPE '\'`.
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(&query.to_lowercase()))
}

/// `?query=` parameter shared by the search pages.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for.
    #[serde(default)]
    #[param(example = "tick")]
    pub query: String,
}

/// Split a comma-separated query parameter into trimmed, non-empty names.
pub fn split_names(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
