use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::groups::GroupRegistry;
use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub views: Arc<Views>,
    pub groups: Arc<GroupRegistry>,
}

impl AppState {
    /// Build the shared state. Templates are compiled here, so a broken template fails startup.
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Result<Self, minijinja::Error> {
        let views = Views::new(&config.server.mount_point())?;
        let groups = GroupRegistry::new(config.groups.clone());
        Ok(Self {
            db,
            config: Arc::new(config),
            views: Arc::new(views),
            groups: Arc::new(groups),
        })
    }

    pub fn hard_limit(&self) -> u64 {
        self.config.submissions.hard_limit
    }
}
