//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InstallError, InstallResult};

use super::types::Config;

/// Environment variable naming a config file to use instead of the default one
pub const CONFIG_PATH_VAR: &str = "PANG_INSTALL_CONFIG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InstallResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| InstallError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, the `PANG_INSTALL_CONFIG` file, the user config
/// file, or defaults - then apply environment overrides.
///
/// An explicitly named file must exist; the user config file is optional.
pub fn load_or_default(explicit: Option<&Path>) -> InstallResult<(Config, Vec<ConfigWarning>)> {
    let env_path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let named = explicit.map(Path::to_path_buf).or(env_path);

    let (config, warnings) = match named {
        Some(path) => load_with_warnings(&path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// `<config dir>/pang-installer/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pang-installer").join("config.toml"))
}

/// Apply environment variable overrides (PANG_INSTALL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // PANG_INSTALL_HOST
    if let Some(host) = lookup("PANG_INSTALL_HOST").filter(|v| !v.is_empty()) {
        config.source.host = host;
    }

    // PANG_INSTALL_MANIFEST
    if let Some(manifest) = lookup("PANG_INSTALL_MANIFEST").filter(|v| !v.is_empty()) {
        config.source.manifest = Some(manifest);
    }

    // PANG_INSTALL_DESTINATION
    if let Some(destination) = lookup("PANG_INSTALL_DESTINATION").filter(|v| !v.is_empty()) {
        config.install.destination = Some(destination);
    }

    // PANG_INSTALL_TIMEOUT_SECS (ignored unless it parses)
    if let Some(secs) = lookup("PANG_INSTALL_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        config.network.timeout_secs = secs;
    }

    // PANG_INSTALL_USER_AGENT
    if let Some(agent) = lookup("PANG_INSTALL_USER_AGENT").filter(|v| !v.is_empty()) {
        config.network.user_agent = agent;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "host",
        "manifest",
        "install",
        "destination",
        "network",
        "timeout_secs",
        "user_agent",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
