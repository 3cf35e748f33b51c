//! Configuration module for the Guftagu web front end.
//!
//! Loads configuration from YAML files and environment variables.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::{AppError, AppResult};

/// Environment variable holding the run mode indicator.
pub const RUN_MODE_VAR: &str = "GUFTAGU_ENV";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub run_mode: RunMode,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/images`.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

/// Whether the process runs in production.
///
/// Only the exact value `production` selects production; anything else is
/// treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum RunMode {
    Production,
    #[default]
    Development,
}

fn default_public_dir() -> String {
    "public/images".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `GUFTAGU_ENV` for the run mode
    /// 2. Environment variables (GUFTAGU_*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite://guftagu.db")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("GUFTAGU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("run_mode", std::env::var(RUN_MODE_VAR).ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl DatabaseConfig {
    /// Parse the configured URL into SQLite connect options.
    ///
    /// Missing database files are created on first connection.
    pub fn connect_options(&self) -> AppResult<SqliteConnectOptions> {
        SqliteConnectOptions::from_str(&self.url)
            .map(|options| options.create_if_missing(true))
            .map_err(|e| AppError::Config(format!("invalid database url {:?}: {e}", self.url)))
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl RunMode {
    pub fn is_production(self) -> bool {
        self == RunMode::Production
    }
}

impl From<String> for RunMode {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&str> for RunMode {
    fn from(value: &str) -> Self {
        if value == "production" {
            RunMode::Production
        } else {
            RunMode::Development
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Production => write!(f, "production"),
            RunMode::Development => write!(f, "development"),
        }
    }
}
