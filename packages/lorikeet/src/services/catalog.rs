use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::{competitor, problem, problem_set, set_content};
use crate::models::problem::Problem;
use crate::models::problem_set::{ProblemSet, ProblemSetBrief};
use crate::models::user::User;

/// Look up a user by username.
pub async fn get_user<C: ConnectionTrait>(db: &C, username: &str) -> Result<Option<User>, DbErr> {
    Ok(competitor::Entity::find()
        .filter(competitor::Column::Username.eq(username))
        .one(db)
        .await?
        .map(User::from))
}

/// Look up a problem by its short name.
pub async fn get_problem<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<Problem>, DbErr> {
    Ok(problem::Entity::find()
        .filter(problem::Column::Name.eq(name))
        .one(db)
        .await?
        .map(Problem::from))
}

/// Look up a set by name, together with its problems in set order.
pub async fn get_set<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<ProblemSet>, DbErr> {
    let Some(set) = problem_set::Entity::find_by_id(name.to_string()).one(db).await? else {
        return Ok(None);
    };

    let problems = set_problems(db, &set.name).await?;

    Ok(Some(ProblemSet {
        brief: ProblemSetBrief::from(set),
        problems,
    }))
}

/// Problems belonging to a set, ordered by problem id.
pub async fn set_problems<C: ConnectionTrait>(
    db: &C,
    set_name: &str,
) -> Result<Vec<Problem>, DbErr> {
    let ids: Vec<i32> = set_problem_ids(db, &[set_name.to_string()]).await?;
    if ids.is_empty() {
        return Ok(vec![]);
    }

    Ok(problem::Entity::find()
        .filter(problem::Column::Id.is_in(ids))
        .order_by_asc(problem::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Problem::from)
        .collect())
}

/// Ids of every problem contained in any of the given sets.
pub async fn set_problem_ids<C: ConnectionTrait>(
    db: &C,
    set_names: &[String],
) -> Result<Vec<i32>, DbErr> {
    if set_names.is_empty() {
        return Ok(vec![]);
    }

    let rows = set_content::Entity::find()
        .filter(set_content::Column::SetName.is_in(set_names.iter().cloned()))
        .order_by_asc(set_content::Column::Problemid)
        .all(db)
        .await?;

    let mut ids: Vec<i32> = rows.into_iter().map(|r| r.problemid).collect();
    ids.dedup();
    Ok(ids)
}

/// Every set that contains the given problem, ordered by set name.
pub async fn sets_containing_problem<C: ConnectionTrait>(
    db: &C,
    problem_id: i32,
) -> Result<Vec<ProblemSetBrief>, DbErr> {
    let set_names: Vec<String> = set_content::Entity::find()
        .filter(set_content::Column::Problemid.eq(problem_id))
        .all(db)
        .await?
        .into_iter()
        .map(|r| r.set_name)
        .collect();

    if set_names.is_empty() {
        return Ok(vec![]);
    }

    Ok(problem_set::Entity::find()
        .filter(problem_set::Column::Name.is_in(set_names))
        .order_by_asc(problem_set::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(ProblemSetBrief::from)
        .collect())
}
