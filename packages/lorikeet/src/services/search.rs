use sea_orm::sea_query::{Alias, Expr, Func, FunctionCall, LikeExpr};
use sea_orm::{ConnectionTrait, Condition, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::entity::{competitor, problem, problem_set};
use crate::models::problem::{Problem, ProblemSearchResult};
use crate::models::problem_set::ProblemSetBrief;
use crate::models::shared::contains_pattern;
use crate::models::user::User;

use super::catalog;

/// `lowered LIKE pattern ESCAPE '\'`, where `lowered` is already wrapped in `lower()`.
fn like(lowered: FunctionCall, pattern: &str) -> Condition {
    Condition::all().add(Expr::expr(lowered).like(LikeExpr::new(pattern).escape('\\')))
}

/// Users whose username, first name, last name or full name contains `query`.
#[instrument(skip(db))]
pub async fn search_users<C: ConnectionTrait>(db: &C, query: &str) -> Result<Vec<User>, DbErr> {
    let pattern = contains_pattern(query);

    let full_name = Func::cust(Alias::new("concat_ws"))
        .arg(Expr::val(" "))
        .arg(Expr::col(competitor::Column::Firstname))
        .arg(Expr::col(competitor::Column::Lastname));

    Ok(competitor::Entity::find()
        .filter(
            Condition::any()
                .add(like(Func::lower(Expr::col(competitor::Column::Username)), &pattern))
                .add(like(Func::lower(Expr::col(competitor::Column::Firstname)), &pattern))
                .add(like(Func::lower(Expr::col(competitor::Column::Lastname)), &pattern))
                .add(like(Func::lower(full_name), &pattern)),
        )
        .order_by_asc(competitor::Column::Firstname)
        .order_by_asc(competitor::Column::Lastname)
        .all(db)
        .await?
        .into_iter()
        .map(User::from)
        .collect())
}

/// Problems whose name or title contains `query`, each with the sets containing it.
#[instrument(skip(db))]
pub async fn search_problems<C: ConnectionTrait>(
    db: &C,
    query: &str,
) -> Result<Vec<ProblemSearchResult>, DbErr> {
    let pattern = contains_pattern(query);

    let problems = problem::Entity::find()
        .filter(
            Condition::any()
                .add(like(Func::lower(Expr::col(problem::Column::Title)), &pattern))
                .add(like(Func::lower(Expr::col(problem::Column::Name)), &pattern)),
        )
        .order_by_asc(problem::Column::Id)
        .all(db)
        .await?;

    let mut results = Vec::with_capacity(problems.len());
    for p in problems {
        let sets = catalog::sets_containing_problem(db, p.id).await?;
        results.push(ProblemSearchResult {
            problem: Problem::from(p),
            sets,
        });
    }
    Ok(results)
}

/// Sets whose name or title contains `query`.
#[instrument(skip(db))]
pub async fn search_sets<C: ConnectionTrait>(
    db: &C,
    query: &str,
) -> Result<Vec<ProblemSetBrief>, DbErr> {
    let pattern = contains_pattern(query);

    Ok(problem_set::Entity::find()
        .filter(
            Condition::any()
                .add(like(Func::lower(Expr::col(problem_set::Column::Name)), &pattern))
                .add(like(Func::lower(Expr::col(problem_set::Column::Title)), &pattern)),
        )
        .order_by_asc(problem_set::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(ProblemSetBrief::from)
        .collect())
}
