//! Daemon configuration.
//!
//! Settings come from three places, highest precedence first: command-line
//! flags (or their environment variables), the optional TOML file at
//! `~/.itemlist/config.toml`, and built-in defaults.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::catalog::DEFAULT_ITEM_COUNT;
use crate::cors::{normalize_origins, DEFAULT_CORS_ORIGINS};
use crate::logging::data_dir;

/// Host the daemon binds to by default (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the daemon binds to by default.
pub const DEFAULT_PORT: u16 = 5000;

/// Default maximum JSON request body size, in bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid host address '{0}': expected an IP address")]
    InvalidHost(String),
}

/// `[server]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_bytes: Option<usize>,
}

/// `[dataset]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetSection {
    pub item_count: Option<usize>,
}

/// `[cors]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    pub origins: Option<Vec<String>>,
}

/// Contents of the TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub dataset: DatasetSection,
    #[serde(default)]
    pub cors: CorsSection,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub item_count: Option<usize>,
    pub max_body_bytes: Option<usize>,
    pub cors_origins: Option<Vec<String>>,
}

/// Fully resolved daemon settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: SocketAddr,
    pub item_count: usize,
    pub max_body_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl Settings {
    /// Merge overrides over the file config over the defaults.
    pub fn resolve(file: &FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let host = overrides
            .host
            .or_else(|| file.server.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;
        let port = overrides
            .port
            .or(file.server.port)
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = overrides
            .cors_origins
            .or_else(|| file.cors.origins.clone())
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGINS.to_string()]);

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            item_count: overrides
                .item_count
                .or(file.dataset.item_count)
                .unwrap_or(DEFAULT_ITEM_COUNT),
            max_body_bytes: overrides
                .max_body_bytes
                .or(file.server.max_body_bytes)
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            cors_origins: normalize_origins(&cors_origins),
        })
    }
}

/// Canonical path of the config file (`~/.itemlist/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Load the config file at `path`.
///
/// A missing file yields `FileConfig::default()`.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        debug!("Config file not found at {}; using defaults", path.display());
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
