//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::{self, config_path};
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Instance discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Where and how instances are looked up
#[derive(Debug, Deserialize)]
pub struct DiscoveryConfig {
    /// Name prefix instances register under
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Directory holding instance sockets (Unix only)
    #[serde(default)]
    pub socket_dir: Option<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            socket_dir: None,
        }
    }
}

fn default_prefix() -> String {
    paths::INSTANCE_PREFIX.to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        if config.discovery.prefix.is_empty() {
            return Err(super::Error::Config(
                "discovery.prefix must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Socket directory, falling back to the platform default
    #[cfg(unix)]
    pub fn socket_dir(&self) -> PathBuf {
        self.discovery
            .socket_dir
            .clone()
            .unwrap_or_else(paths::socket_dir)
    }
}
