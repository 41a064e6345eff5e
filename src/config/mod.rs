//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PANG_INSTALL_*)
//! 3. Config file (`--config`, `$PANG_INSTALL_CONFIG`, or
//!    `<config dir>/pang-installer/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, default_config_path, load_or_default, load_with_warnings,
    with_env_overrides, ConfigWarning, CONFIG_PATH_VAR,
};
pub use types::{Config, InstallConfig, NetworkConfig, SourceConfig};
