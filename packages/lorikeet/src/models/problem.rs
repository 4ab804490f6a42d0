use serde::Serialize;

use crate::entity::problem;

use super::problem_set::ProblemSetBrief;

#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Problem {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "aio11tickets")]
    pub name: String,
    #[schema(example = "Tickets")]
    pub title: String,
}

impl From<problem::Model> for Problem {
    fn from(m: problem::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            title: m.title,
        }
    }
}

/// Aggregate numbers shown on a problem's page.
#[derive(Clone, Debug, Default, Serialize, utoipa::ToSchema)]
pub struct ProblemStats {
    /// Distinct competitors with a full-mark submission.
    #[schema(example = 12)]
    pub total_solves: u64,
    #[schema(example = 85)]
    pub total_submissions: u64,
    /// Submissions made by solvers divided by the number of solvers.
    /// Null when nobody has solved the problem.
    #[schema(example = 3)]
    pub average_submissions_per_solve: Option<u64>,
    /// Distinct competitors who have opened the problem.
    #[schema(example = 40)]
    pub total_viewers: u64,
}

/// A problem matched by a search, with every set that contains it.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct ProblemSearchResult {
    pub problem: Problem,
    pub sets: Vec<ProblemSetBrief>,
}

/// Everything the problem page and its API counterpart show.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct ProblemDetail {
    pub problem: Problem,
    pub stats: ProblemStats,
    pub sets: Vec<ProblemSetBrief>,
}
