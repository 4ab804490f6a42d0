use serde::Serialize;

use super::problem_set::{ProblemSet, ProblemSetScores};
use super::user::User;

/// A configured group with its members resolved against the database.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct Group {
    #[schema(example = "aio")]
    pub name: String,
    #[schema(example = "AIO Training Squad")]
    pub title: String,
    pub users: Vec<User>,
    pub sets: Vec<ProblemSet>,
}

/// Group scoreboard: `marks[i][j]` is `users[j]`'s standing in `sets[i]`.
#[derive(Clone, Debug, Serialize, utoipa::ToSchema)]
pub struct GroupMarks {
    #[serde(flatten)]
    pub group: Group,
    pub marks: Vec<Vec<ProblemSetScores>>,
}
