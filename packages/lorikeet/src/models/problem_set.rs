use serde::Serialize;

use crate::entity::problem_set;

use super::problem::Problem;
use super::submission::SubmissionScoreSummary;

#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct ProblemSetBrief {
    #[schema(example = "graph14decalpha1")]
    pub name: String,
    #[schema(example = "Graph Theory I")]
    pub title: String,
    pub public: bool,
}

impl From<problem_set::Model> for ProblemSetBrief {
    fn from(m: problem_set::Model) -> Self {
        Self {
            name: m.name,
            title: m.title,
            public: m.public,
        }
    }
}

/// A named collection of problems, in set order.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct ProblemSet {
    #[serde(flatten)]
    pub brief: ProblemSetBrief,
    pub problems: Vec<Problem>,
}

/// One user's standing in a set.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct ProblemSetScores {
    #[serde(flatten)]
    pub brief: ProblemSetBrief,
    /// Average of best marks across the set's problems. Null when the user
    /// has no marked attempt at any of them.
    #[schema(example = 65)]
    pub mark: Option<i32>,
    /// Best mark per problem, in set order.
    pub subs: Vec<SubmissionScoreSummary>,
}
