use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::problem::Problem;
use super::user::User;

/// Best mark of a user on a problem.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct SubmissionScoreSummary {
    pub user: User,
    pub problem: Problem,
    /// Null when the user has no marked attempt.
    #[schema(example = 100)]
    pub mark: Option<i32>,
}

/// One row of a submissions listing.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct SubmissionSummary {
    pub user: User,
    pub problem: Problem,
    /// Attempt number as stored by the judge; used in download names.
    #[schema(example = 3)]
    pub attempt: i32,
    /// 1-based position among this user's attempts at this problem, oldest
    /// first. Attempt URLs address submissions by position.
    #[schema(example = 3)]
    pub position: u64,
    /// Null when judging ended before a mark was assigned.
    #[schema(example = 60)]
    pub mark: Option<i32>,
    #[schema(example = "2014-12-29T10:15:00Z")]
    pub timestamp: DateTime<Utc>,
    /// Total submissions by this user to this problem.
    #[schema(example = 5)]
    pub num_attempts: u64,
}

/// A single attempt with its source and judge output.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Submission {
    #[serde(flatten)]
    pub summary: SubmissionSummary,
    pub source: String,
    /// Language display name, e.g. `C++`.
    #[schema(example = "C++")]
    pub lang: String,
    /// Language identifier, used as the download extension.
    #[schema(example = "cpp")]
    pub langid: String,
    pub judge: Option<String>,
}

/// Which submissions to list. Empty lists impose no restriction on that dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    pub users: Vec<String>,
    pub sets: Vec<String>,
    pub problems: Vec<String>,
}

impl SubmissionFilter {
    pub fn users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users = users.into_iter().map(Into::into).collect();
        self
    }

    pub fn sets<I, S>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets = sets.into_iter().map(Into::into).collect();
        self
    }

    pub fn problems<I, S>(mut self, problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.problems = problems.into_iter().map(Into::into).collect();
        self
    }

    pub fn restricts_problems(&self) -> bool {
        !self.sets.is_empty() || !self.problems.is_empty()
    }
}

/// Query parameters for the submissions API.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SubmissionListQuery {
    /// Comma-separated usernames.
    #[param(example = "junkbot,rayli")]
    pub users: Option<String>,
    /// Comma-separated set names.
    #[param(example = "graph14decalpha1")]
    pub sets: Option<String>,
    /// Comma-separated problem names.
    #[param(example = "aio11tickets")]
    pub problems: Option<String>,
}

impl From<SubmissionListQuery> for SubmissionFilter {
    fn from(q: SubmissionListQuery) -> Self {
        use super::shared::split_names;

        Self {
            users: split_names(q.users.as_deref()),
            sets: split_names(q.sets.as_deref()),
            problems: split_names(q.problems.as_deref()),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmissionListResponse {
    pub data: Vec<SubmissionSummary>,
    /// Maximum rows a listing returns.
    #[schema(example = 100)]
    pub limit: u64,
}

/// Resolve a requested attempt number against `count` stored attempts.
///
/// Positive numbers are 1-based, negative numbers count back from the latest
/// attempt (`-1` is the latest). Returns a 0-based index, or `None` for `0`
/// and anything out of range.
pub fn resolve_attempt_index(requested: i64, count: usize) -> Option<usize> {
    let count = i64::try_from(count).ok()?;
    let index = match requested {
        0 => None,
        n if n > 0 => (n <= count).then(|| n - 1),
        n => n.checked_add(count).filter(|i| *i >= 0),
    }?;
    usize::try_from(index).ok()
}
