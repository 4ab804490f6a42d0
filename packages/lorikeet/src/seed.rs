use sea_orm::sea_query::{Index, IndexCreateStatement, PostgresQueryBuilder};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use tracing::info;

use crate::entity::{progress, submission};

/// Indexes backing the listing, attempt counting and viewer queries.
fn indexes() -> Vec<(&'static str, IndexCreateStatement)> {
    vec![
        (
            "idx_submissions_timestamp",
            Index::create()
                .if_not_exists()
                .name("idx_submissions_timestamp")
                .table(submission::Entity)
                .col(submission::Column::Timestamp)
                .to_owned(),
        ),
        (
            "idx_submissions_competitor_problem",
            Index::create()
                .if_not_exists()
                .name("idx_submissions_competitor_problem")
                .table(submission::Entity)
                .col(submission::Column::Competitorid)
                .col(submission::Column::Problemid)
                .to_owned(),
        ),
        (
            "idx_progress_problem",
            Index::create()
                .if_not_exists()
                .name("idx_progress_problem")
                .table(progress::Entity)
                .col(progress::Column::Problemid)
                .to_owned(),
        ),
    ]
}

/// Ensure the read-path indexes exist, stopping at the first failure.
///
/// Only called when `database.ensure_indexes` is set.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (name, index) in indexes() {
        let stmt = index.to_string(PostgresQueryBuilder);
        db.execute_unprepared(&stmt).await?;
        info!("Ensured index {} exists", name);
    }
    Ok(())
}
