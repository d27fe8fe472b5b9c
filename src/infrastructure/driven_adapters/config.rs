//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config/default` is missing or the merged
    /// sources do not deserialize into `AppConfig`.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__DATABASE__URL)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
