use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use tracing::instrument;

use crate::entity::progress;
use crate::models::group::{Group, GroupMarks};
use crate::models::problem_set::{ProblemSet, ProblemSetScores};
use crate::models::submission::SubmissionScoreSummary;
use crate::models::user::User;

/// Average of a user's best marks across a set.
///
/// Problems without a mark count as 0. When none of the problems has a mark
/// the user has not attempted the set and the result is `None`, which is
/// different from an average of 0. Uses integer division.
pub fn average_mark(marks: &[Option<i32>]) -> Option<i32> {
    if marks.iter().all(Option::is_none) {
        return None;
    }
    let total: i64 = marks.iter().flatten().map(|&m| i64::from(m)).sum();
    let count = i64::try_from(marks.len()).ok()?;
    i32::try_from(total / count).ok()
}

/// Best marks of every user on every problem of `set`, one query for the whole set.
#[instrument(skip_all, fields(set = %set.brief.name, users = users.len()))]
pub async fn set_scores<C: ConnectionTrait>(
    db: &C,
    users: &[User],
    set: &ProblemSet,
) -> Result<Vec<ProblemSetScores>, DbErr> {
    let best = best_scores(db, users, set).await?;

    Ok(users
        .iter()
        .map(|user| {
            let subs: Vec<SubmissionScoreSummary> = set
                .problems
                .iter()
                .map(|problem| SubmissionScoreSummary {
                    user: user.clone(),
                    problem: problem.clone(),
                    mark: best.get(&(user.id, problem.id)).copied().flatten(),
                })
                .collect();
            let marks: Vec<Option<i32>> = subs.iter().map(|s| s.mark).collect();

            ProblemSetScores {
                brief: set.brief.clone(),
                mark: average_mark(&marks),
                subs,
            }
        })
        .collect())
}

/// Scores for every set of a group: `result[i][j]` is user `j` on set `i`.
pub async fn group_scores<C: ConnectionTrait>(
    db: &C,
    group: Group,
) -> Result<GroupMarks, DbErr> {
    let mut marks = Vec::with_capacity(group.sets.len());
    for set in &group.sets {
        marks.push(set_scores(db, &group.users, set).await?);
    }
    Ok(GroupMarks { group, marks })
}

async fn best_scores<C: ConnectionTrait>(
    db: &C,
    users: &[User],
    set: &ProblemSet,
) -> Result<HashMap<(i32, i32), Option<i32>>, DbErr> {
    if users.is_empty() || set.problems.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = progress::Entity::find()
        .filter(progress::Column::Competitorid.is_in(users.iter().map(|u| u.id)))
        .filter(progress::Column::Problemid.is_in(set.problems.iter().map(|p| p.id)))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|r| ((r.competitorid, r.problemid), r.bestscore))
        .collect())
}
