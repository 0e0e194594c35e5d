use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::chain::ChainConfig;
use super::errors::ConfigError;
use super::fallback::FallbackConfig;
use super::hesiod::{HesiodConfig, MAX_HESIOD_TTL};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::chain::BlockHash;

const LOCAL_CONFIG_PATH: &str = "hesiod-tip.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/hesiod-tip/config.toml";

/// Main configuration structure for hesiod-tip
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, TCP)
    #[serde(default)]
    pub server: ServerConfig,

    /// Synthesized answer settings
    #[serde(default)]
    pub hesiod: HesiodConfig,

    /// General resolver for everything outside `hnsd.`
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Genesis and header import
    #[serde(default)]
    pub chain: ChainConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hesiod-tip.toml in current directory
    /// 3. /etc/hesiod-tip/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
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
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.fallback.upstream = Some(upstream);
        }
        if let Some(headers) = overrides.headers_file {
            self.chain.headers_file = Some(headers);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.hesiod.ttl > MAX_HESIOD_TTL {
            return Err(ConfigError::Validation(format!(
                "Hesiod TTL {} exceeds maximum of {} seconds",
                self.hesiod.ttl, MAX_HESIOD_TTL
            )));
        }

        BlockHash::from_hex(&self.chain.genesis_hash)
            .map_err(|e| ConfigError::Validation(format!("chain.genesis_hash: {}", e)))?;

        if let Some(upstream) = &self.fallback.upstream {
            upstream.parse::<SocketAddr>().map_err(|_| {
                ConfigError::Validation(format!("Invalid fallback upstream '{}'", upstream))
            })?;
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub headers_file: Option<String>,
    pub log_level: Option<String>,
}
