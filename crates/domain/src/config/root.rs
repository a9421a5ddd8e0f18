use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

/// Main configuration structure for opentld
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address, request deadline)
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry configuration (system TLD set)
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Upstream DoH provider map for unmanaged TLDs
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. opentld.toml in current directory
    /// 3. /etc/opentld/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("opentld.toml").exists() {
            Self::from_file("opentld.toml")?
        } else if std::path::Path::new("/etc/opentld/config.toml").exists() {
            Self::from_file("/etc/opentld/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.http_port {
            self.server.http_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.upstream.providers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream providers configured".to_string(),
            ));
        }

        let default_known = self
            .upstream
            .providers
            .iter()
            .any(|p| p.key.eq_ignore_ascii_case(&self.upstream.default_provider));
        if !default_known {
            return Err(ConfigError::Validation(format!(
                "Default provider '{}' is not in the provider map",
                self.upstream.default_provider
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub http_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
