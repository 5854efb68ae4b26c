use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "repair-tracker.toml";

/// Main configuration structure for Repair Tracker
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RepairTrackerConfig {
    /// Database settings
    pub database: DatabaseConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Repair workflow settings
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database URL (SQLite file path or connection string)
    pub url: String,
    /// Maximum connections in pool
    pub max_connections: u32,
    /// Enable automatic migrations
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level, overridden by RUST_LOG when set
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Reject state changes the repair workflow does not allow
    pub enforce_transitions: bool,
}

impl Default for RepairTrackerConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://repair-tracker.db".to_string(),
                max_connections: 5,
                auto_migrate: true,
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
            workflow: WorkflowConfig {
                enforce_transitions: true,
            },
        }
    }
}

impl RepairTrackerConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (repair-tracker.toml, or the given path)
    /// 3. Environment variables (prefixed with REPAIR_TRACKER__)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path));
            }
            None => {
                if Path::new(CONFIG_FILE).exists() {
                    builder = builder.add_source(File::with_name(CONFIG_FILE));
                }
            }
        }

        // REPAIR_TRACKER__DATABASE__URL=... overrides database.url
        builder = builder.add_source(
            Environment::with_prefix("REPAIR_TRACKER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
