use std::collections::{HashMap, HashSet};

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{debug, instrument};

use crate::entity::{competitor, language, problem, submission};
use crate::models::problem::Problem;
use crate::models::submission::{
    Submission, SubmissionFilter, SubmissionSummary, resolve_attempt_index,
};
use crate::models::user::User;

use super::catalog;

/// List submissions matching `filter`, newest first, at most `limit` rows.
///
/// A non-empty user list restricts to those users; non-empty set or problem
/// lists restrict to the union of the problems they name. Names that do not
/// exist match nothing, so a filter whose names are all unknown returns no rows.
#[instrument(skip(db))]
pub async fn filter_submissions<C: ConnectionTrait>(
    db: &C,
    filter: &SubmissionFilter,
    limit: u64,
) -> Result<Vec<SubmissionSummary>, DbErr> {
    let mut select = submission::Entity::find();

    if !filter.users.is_empty() {
        let user_ids = user_ids(db, &filter.users).await?;
        select = select.filter(submission::Column::Competitorid.is_in(user_ids));
    }

    if filter.restricts_problems() {
        let problem_ids = problem_ids(db, &filter.sets, &filter.problems).await?;
        select = select.filter(submission::Column::Problemid.is_in(problem_ids));
    }

    let rows = select
        .order_by_desc(submission::Column::Timestamp)
        .order_by_desc(submission::Column::Attempt)
        .limit(Some(limit))
        .all(db)
        .await?;

    debug!(rows = rows.len(), "Submissions fetched");

    summarize(db, rows).await
}

/// Number of submissions a user has made to a problem.
pub async fn count_attempts<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    problem_id: i32,
) -> Result<u64, DbErr> {
    submission::Entity::find()
        .filter(submission::Column::Competitorid.eq(user_id))
        .filter(submission::Column::Problemid.eq(problem_id))
        .count(db)
        .await
}

/// Fetch one attempt by user, problem and attempt text.
///
/// `attempt` is taken verbatim from the URL: anything that is not an integer,
/// `0`, or out of range yields `None`. Negative values count back from the
/// latest attempt.
#[instrument(skip(db))]
pub async fn get_submission<C: ConnectionTrait>(
    db: &C,
    username: &str,
    problem_name: &str,
    attempt: &str,
) -> Result<Option<Submission>, DbErr> {
    let Ok(requested) = attempt.trim().parse::<i64>() else {
        return Ok(None);
    };

    let Some(user) = catalog::get_user(db, username).await? else {
        return Ok(None);
    };
    let Some(problem) = catalog::get_problem(db, problem_name).await? else {
        return Ok(None);
    };

    let mut attempts = submission::Entity::find()
        .filter(submission::Column::Competitorid.eq(user.id))
        .filter(submission::Column::Problemid.eq(problem.id))
        .order_by_asc(submission::Column::Attempt)
        .find_also_related(language::Entity)
        .all(db)
        .await?;

    let Some(index) = resolve_attempt_index(requested, attempts.len()) else {
        return Ok(None);
    };

    let num_attempts = attempts.len() as u64;
    let position = index as u64 + 1;
    let (sub, lang) = attempts.swap_remove(index);
    let (lang_name, lang_id) = match lang {
        Some(l) => (l.name, l.id),
        None => (sub.languageid.clone(), sub.languageid.clone()),
    };

    Ok(Some(Submission {
        summary: SubmissionSummary {
            user,
            problem,
            attempt: sub.attempt,
            position,
            mark: sub.mark,
            timestamp: sub.timestamp,
            num_attempts,
        },
        source: sub.submitted_file.trim().to_string(),
        lang: lang_name,
        langid: lang_id,
        judge: sub.judge,
    }))
}

/// Resolve usernames to competitor ids. Unknown usernames are dropped.
async fn user_ids<C: ConnectionTrait>(db: &C, usernames: &[String]) -> Result<Vec<i32>, DbErr> {
    competitor::Entity::find()
        .select_only()
        .column(competitor::Column::Id)
        .filter(competitor::Column::Username.is_in(usernames.iter().cloned()))
        .into_tuple()
        .all(db)
        .await
}

/// Union of problems in the named sets and the named problems.
async fn problem_ids<C: ConnectionTrait>(
    db: &C,
    sets: &[String],
    problems: &[String],
) -> Result<Vec<i32>, DbErr> {
    let mut ids: HashSet<i32> = catalog::set_problem_ids(db, sets).await?.into_iter().collect();

    if !problems.is_empty() {
        let named: Vec<i32> = problem::Entity::find()
            .select_only()
            .column(problem::Column::Id)
            .filter(problem::Column::Name.is_in(problems.iter().cloned()))
            .into_tuple()
            .all(db)
            .await?;
        ids.extend(named);
    }

    Ok(ids.into_iter().collect())
}

/// Attach users, problems, attempt positions and counts to raw submission rows.
async fn summarize<C: ConnectionTrait>(
    db: &C,
    rows: Vec<submission::Model>,
) -> Result<Vec<SubmissionSummary>, DbErr> {
    if rows.is_empty() {
        return Ok(vec![]);
    }

    let user_ids: HashSet<i32> = rows.iter().map(|r| r.competitorid).collect();
    let problem_ids: HashSet<i32> = rows.iter().map(|r| r.problemid).collect();

    let users: HashMap<i32, User> = competitor::Entity::find()
        .filter(competitor::Column::Id.is_in(user_ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, User::from(c)))
        .collect();

    let problems: HashMap<i32, Problem> = problem::Entity::find()
        .filter(problem::Column::Id.is_in(problem_ids.iter().copied()))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, Problem::from(p)))
        .collect();

    let attempts = attempt_numbers(db, &user_ids, &problem_ids).await?;

    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let user = users.get(&row.competitorid).cloned().ok_or_else(|| {
            DbErr::RecordNotFound(format!("competitor {} for submission", row.competitorid))
        })?;
        let problem = problems.get(&row.problemid).cloned().ok_or_else(|| {
            DbErr::RecordNotFound(format!("problem {} for submission", row.problemid))
        })?;

        let numbers = attempts
            .get(&(row.competitorid, row.problemid))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let position = numbers.partition_point(|&n| n < row.attempt) as u64 + 1;

        data.push(SubmissionSummary {
            num_attempts: numbers.len() as u64,
            user,
            problem,
            attempt: row.attempt,
            position,
            mark: row.mark,
            timestamp: row.timestamp,
        });
    }

    Ok(data)
}

/// Stored attempt numbers per (competitor, problem), ascending, for every
/// pair drawn from the given ids.
async fn attempt_numbers<C: ConnectionTrait>(
    db: &C,
    user_ids: &HashSet<i32>,
    problem_ids: &HashSet<i32>,
) -> Result<HashMap<(i32, i32), Vec<i32>>, DbErr> {
    let rows: Vec<(i32, i32, i32)> = submission::Entity::find()
        .select_only()
        .column(submission::Column::Competitorid)
        .column(submission::Column::Problemid)
        .column(submission::Column::Attempt)
        .filter(submission::Column::Competitorid.is_in(user_ids.iter().copied()))
        .filter(submission::Column::Problemid.is_in(problem_ids.iter().copied()))
        .order_by_asc(submission::Column::Attempt)
        .into_tuple()
        .all(db)
        .await?;

    let mut numbers: HashMap<(i32, i32), Vec<i32>> = HashMap::new();
    for (user_id, problem_id, attempt) in rows {
        numbers.entry((user_id, problem_id)).or_default().push(attempt);
    }
    Ok(numbers)
}
