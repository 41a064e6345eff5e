//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RAW_CONTENT_HOST;
use crate::error::InstallResult;

use super::loader::{self, ConfigWarning};

/// Where manifests and files are fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Host prefix prepended to every repository reference
    #[serde(default = "default_host")]
    pub host: String,

    /// Manifest file name (defaults to `files` when unset)
    #[serde(default)]
    pub manifest: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            manifest: None,
        }
    }
}

fn default_host() -> String {
    RAW_CONTENT_HOST.to_string()
}

/// Where files land
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Destination root; unset means the working directory
    #[serde(default)]
    pub destination: Option<String>,
}

/// HTTP client settings for the downloader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("pang-installer/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InstallResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InstallResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (PANG_INSTALL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
