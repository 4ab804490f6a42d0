use sea_orm::{ConnectionTrait, DbBackend, Statement};

use crate::common::TestApp;

async fn index_names(app: &TestApp) -> Vec<String> {
    app.db
        .query_all_raw(Statement::from_string(
            DbBackend::Postgres,
            "SELECT indexname FROM pg_indexes WHERE tablename IN ('submissions', 'progress')"
                .to_string(),
        ))
        .await
        .expect("list indexes")
        .into_iter()
        .map(|row| row.try_get::<String>("", "indexname").expect("indexname"))
        .collect()
}

#[tokio::test]
async fn read_path_indexes_can_be_ensured_repeatedly() {
    let app = TestApp::spawn().await;

    lorikeet::seed::ensure_indexes(&app.db)
        .await
        .expect("existing indexes should be accepted");

    let names = index_names(&app).await;
    for expected in [
        "idx_submissions_timestamp",
        "idx_submissions_competitor_problem",
        "idx_progress_problem",
    ] {
        assert!(names.iter().any(|n| n == expected), "{expected} in {names:?}");
    }
}
