use serde::{Deserialize, Serialize};
use std::path::Path;

use super::agent::{AgentConfig, AgentSettings};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration structure for the VIP agent
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Control plane polling and mapping inference
    pub agent: AgentConfig,

    /// Lookup endpoint
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`, apply command-line overrides and
    /// validate the result.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn load(path: &str, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        let is_json = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.listen_port {
            self.server.listen_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.agent.settings()?;
        self.server.listen_address()?;
        Ok(())
    }

    /// Typed agent settings. Fails only if the config was never validated.
    pub fn agent_settings(&self) -> Result<AgentSettings, ConfigError> {
        self.agent.settings()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen_port: Option<u16>,
    pub log_level: Option<String>,
}
