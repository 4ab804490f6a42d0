use std::collections::BTreeMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// URL prefix the site is mounted under behind a reverse proxy, e.g. `/lorikeet`.
    /// Empty when served from the root.
    #[serde(default)]
    pub script_name: String,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Create missing tables from the entity definitions on startup.
    /// Off for the production training database, whose schema is owned elsewhere.
    pub sync_schema: bool,
    /// Create the read-path indexes on startup. Off by default: building an
    /// index locks `submissions` against the judge's inserts.
    pub ensure_indexes: bool,
    pub sql_logging: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubmissionConfig {
    /// Maximum number of rows returned by a submissions listing.
    pub hard_limit: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { hard_limit: 100 }
    }
}

/// A statically configured bundle of users and sets.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GroupConfig {
    pub title: String,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub sets: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub submissions: SubmissionConfig,
    #[serde(default)]
    pub groups: BTreeMap<String, GroupConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Self::builder()?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., LORIKEET__DATABASE__URL)
            .add_source(Environment::with_prefix("LORIKEET").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.script_name", "")?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "postgres://localhost/train")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 1)?
            .set_default("database.sync_schema", false)?
            .set_default("database.ensure_indexes", false)?
            .set_default("database.sql_logging", false)?
            .set_default("submissions.hard_limit", 100)
    }
}

impl ServerConfig {
    /// Normalized mount point: empty, or a path starting with `/` and without a trailing `/`.
    pub fn mount_point(&self) -> String {
        let trimmed = self.script_name.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }
}
