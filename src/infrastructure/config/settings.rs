//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates all application settings.
//! Configuration is read from an optional TOML file; every key has a default.
//!
//! # Example
//!
//! ```no_run
//! use sakila::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::infrastructure::paths;
use crate::error::{ConfigError, Result};

/// Where the catalog is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database URL or file path.
    ///
    /// Defaults to `~/.sakila/sakila.db`.
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum pooled connections. The menu is sequential, so one is enough.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_database_url() -> String {
    paths::default_database().to_string_lossy().into_owned()
}

fn default_pool_size() -> u32 {
    1
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            pool_size: default_pool_size(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or [`Config::load_or_default`],
/// or parse directly with [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database location and pool sizing.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    /// Replace the database URL, e.g. from `--database`.
    #[must_use]
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.database.url = url;
        }
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first out-of-range value.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.url",
                reason: "must not be empty".into(),
            }
            .into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.pool_size",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "expected one of {}, got {:?}",
                    LoggingConfig::FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging based on configuration and `-v` count.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert!(config.database.url.ends_with("sakila.db"));
        assert_eq!(config.database.pool_size, 1);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse_toml(
            r#"
[database]
url = "/srv/sakila.db"

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.database.url, "/srv/sakila.db");
        assert_eq!(config.database.pool_size, 1);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn rejects_zero_pool_size() {
        let result = Config::parse_toml("[database]\npool_size = 0\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "database.pool_size",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_blank_url() {
        let result = Config::parse_toml("[database]\nurl = \"  \"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "database.url",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            Config::parse_toml("[database"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn database_override_replaces_url() {
        let config = Config::default().with_database_url(Some(":memory:".into()));
        assert_eq!(config.database.url, ":memory:");

        let config = config.with_database_url(None);
        assert_eq!(config.database.url, ":memory:");
    }
}
