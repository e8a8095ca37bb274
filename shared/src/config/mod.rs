//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//! - `storage` - Object storage bucket configuration
//! - `validation` - Validation message template overrides
//!
//! Settings are layered: built-in defaults, then `config.json`, then
//! `config.<environment>.json` from the config directory, then `APP__`
//! prefixed environment variables (`APP__SERVER__PORT=9000`).

pub mod environment;
pub mod server;
pub mod storage;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use validation::ValidationConfig;

/// Directory searched for settings files when `CONFIG_DIR` is unset
pub const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load `.env`, detect the environment and read settings from
    /// `CONFIG_DIR` (default `config`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
        Self::load_from(dir, Environment::from_env())
    }

    /// Read settings for `environment` from JSON files in `dir`. Missing files
    /// are skipped.
    pub fn load_from(dir: impl AsRef<Path>, environment: Environment) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let logging = LoggingConfig::for_environment(environment);
        let base = dir.join("config.json");
        let per_environment = dir.join(format!("{}.json", environment.config_name()));

        let settings = ::config::Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", format_name(logging.format))?
            .add_source(
                ::config::File::new(&base.to_string_lossy(), ::config::FileFormat::Json)
                    .required(false),
            )
            .add_source(
                ::config::File::new(&per_environment.to_string_lossy(), ::config::FileFormat::Json)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Json => "json",
        LogFormat::Pretty => "pretty",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fs-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = scratch_dir("empty");

        let config = AppConfig::load_from(&dir, Environment::Production).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.logging, LoggingConfig::for_environment(Environment::Production));
        assert!(config.validation.messages.is_empty());
    }

    #[test]
    fn environment_file_overrides_base_file() {
        let dir = scratch_dir("layered");
        fs::write(
            dir.join("config.json"),
            r#"{"server": {"host": "127.0.0.1", "port": 7000},
                "validation": {"messages": {"min": "%s must be at least %s"}}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("config.staging.json"),
            r#"{"server": {"port": 7100}, "storage": {"bucket_name": "fields-staging"}}"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&dir, Environment::Staging).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7100);
        assert_eq!(config.storage.bucket_name, "fields-staging");
        assert_eq!(
            config.validation.messages.get("min").map(String::as_str),
            Some("%s must be at least %s")
        );
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("config.json"), "{ not json").unwrap();

        assert!(AppConfig::load_from(&dir, Environment::Development).is_err());
    }
}
