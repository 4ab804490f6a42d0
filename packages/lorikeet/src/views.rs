use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;

/// Page templates, compiled into the binary.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("macros.html", include_str!("../templates/macros.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("user_page.html", include_str!("../templates/user_page.html")),
    ("problem_page.html", include_str!("../templates/problem_page.html")),
    ("set_page.html", include_str!("../templates/set_page.html")),
    ("user_problem.html", include_str!("../templates/user_problem.html")),
    ("user_set.html", include_str!("../templates/user_set.html")),
    ("submission.html", include_str!("../templates/submission.html")),
    ("group_scoreboard.html", include_str!("../templates/group_scoreboard.html")),
    ("group_subs.html", include_str!("../templates/group_subs.html")),
    ("group_problem.html", include_str!("../templates/group_problem.html")),
    ("group_set.html", include_str!("../templates/group_set.html")),
    ("search_user.html", include_str!("../templates/search_user.html")),
    ("search_problem.html", include_str!("../templates/search_problem.html")),
];

/// Rendering environment shared by all page handlers.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Build the environment. `base_path` prefixes every link the templates emit.
    pub fn new(base_path: &str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        env.add_global("base_path", Value::from_safe_string(base_path.to_string()));
        env.add_filter("mark_color_class", |mark: Option<i64>| mark_color_class(mark));
        env.add_filter("prism_lang", |lang: String| prism_lang(&lang).to_string());
        env.add_filter("format_time", |ts: String| format_time(&ts));

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// CSS class used to colour a mark. Absent or negative marks mean no attempt.
pub fn mark_color_class(mark: Option<i64>) -> String {
    match mark {
        None => "score_no_attempt".into(),
        Some(m) if m < 0 => "score_no_attempt".into(),
        Some(0) => "score_0".into(),
        Some(100) => "score_100".into(),
        Some(m) => {
            let band = m / 10 * 10;
            format!("score_{}_{}", band, band + 10)
        }
    }
}

/// Prism.js language identifier for a language display name.
pub fn prism_lang(lang: &str) -> &'static str {
    match lang {
        "C" => "c",
        "C++" | "Caml" => "cpp",
        "Haskell" => "haskell",
        "Java" => "java",
        "Pascal" => "pascal",
        "PHP" => "php",
        "Python" => "python",
        _ => "cpp",
    }
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`. Unparseable input is returned unchanged.
pub fn format_time(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|t| t.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| ts.to_string())
}
