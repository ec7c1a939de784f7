//! Process configuration.
//!
//! Read once from a JSON file at startup. When the file does not exist a
//! default one is written in its place and used. Inside an existing file a
//! missing `Enable` means disabled and a missing `Port` means 8080.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MistConfig {
    #[serde(default = "GlobalNodeConfig::unset")]
    pub global_node: GlobalNodeConfig,
}

/// Settings of the publicly reachable signaling node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalNodeConfig {
    /// When false the server never binds and the process exits right away.
    #[serde(default)]
    pub enable: bool,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl GlobalNodeConfig {
    fn unset() -> Self {
        Self {
            enable: false,
            port: DEFAULT_PORT,
        }
    }
}

impl Default for GlobalNodeConfig {
    fn default() -> Self {
        Self {
            enable: true,
            port: DEFAULT_PORT,
        }
    }
}

impl MistConfig {
    /// Load the config at `path`, creating it with defaults if missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());

        if !path.exists() {
            return Self::create_default(path);
        }

        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn create_default(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::default();
        let json = serde_json::to_string_pretty(&config).map_err(ConfigError::Serialize)?;
        fs::write(path, json)?;

        info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.global_node.port))
    }
}
