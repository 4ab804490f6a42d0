use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lorikeet::config::AppConfig;
use lorikeet::database::init_db;
use lorikeet::seed::ensure_indexes;
use lorikeet::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let db = init_db(&config.database)
        .await
        .context("Failed to connect to database")?;
    if config.database.ensure_indexes {
        ensure_indexes(&db)
            .await
            .context("Failed to ensure database indexes")?;
    }

    let groups = config.groups.len();
    let state = AppState::new(db, config).context("Failed to compile page templates")?;
    info!(groups, "Loaded group configuration");

    let app = lorikeet::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Lorikeet listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
