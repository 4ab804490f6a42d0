use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    QueryTrait,
};
use tracing::instrument;

use crate::entity::{progress, submission};
use crate::models::problem::ProblemStats;

/// Full marks.
const SOLVED_MARK: i32 = 100;

/// Solve and submission counts for a problem's page.
#[instrument(skip(db))]
pub async fn problem_stats<C: ConnectionTrait>(
    db: &C,
    problem_id: i32,
) -> Result<ProblemStats, DbErr> {
    let solvers = submission::Entity::find()
        .select_only()
        .column(submission::Column::Competitorid)
        .distinct()
        .filter(submission::Column::Problemid.eq(problem_id))
        .filter(submission::Column::Mark.eq(SOLVED_MARK));

    let total_solves = solvers.clone().count(db).await?;

    let total_submissions = submission::Entity::find()
        .filter(submission::Column::Problemid.eq(problem_id))
        .count(db)
        .await?;

    let average_submissions_per_solve = if total_solves == 0 {
        None
    } else {
        let solver_submissions = submission::Entity::find()
            .filter(submission::Column::Problemid.eq(problem_id))
            .filter(submission::Column::Competitorid.in_subquery(solvers.into_query()))
            .count(db)
            .await?;
        Some(solver_submissions / total_solves)
    };

    let total_viewers = progress::Entity::find()
        .filter(progress::Column::Problemid.eq(problem_id))
        .count(db)
        .await?;

    Ok(ProblemStats {
        total_solves,
        total_submissions,
        average_submissions_per_solve,
        total_viewers,
    })
}
