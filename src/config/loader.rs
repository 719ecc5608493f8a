//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable selecting the config file.
pub const CONFIG_ENV_VAR: &str = "SUBURB_SEARCH_CONFIG";

/// Environment variable overriding the candidate file.
pub const CANDIDATES_ENV_VAR: &str = "SUBURB_SEARCH_CANDIDATES";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not UTF-8).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/suburb-search/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Newline-delimited candidate list replacing the built-in suburbs.
    #[serde(default)]
    pub candidates_file: Option<PathBuf>,

    /// How long a notification stays visible, in milliseconds.
    #[serde(default)]
    pub notification_timeout_ms: Option<u64>,

    /// How long a simulated search takes, in milliseconds.
    #[serde(default)]
    pub search_delay_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Candidate file; `None` means the built-in Sydney list.
    pub candidates_file: Option<PathBuf>,
    /// Notification lifetime in milliseconds.
    pub notification_timeout_ms: u64,
    /// Simulated search delay in milliseconds.
    pub search_delay_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            candidates_file: None,
            notification_timeout_ms: 4000,
            search_delay_ms: 2000,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/suburb-search/suburb-search.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory
/// when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("suburb-search").join("suburb-search.log")
    } else {
        PathBuf::from("suburb-search.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/suburb-search/config.toml` on Linux.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("suburb-search").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SUBURB_SEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/suburb-search/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        candidates_file: config.candidates_file.or(defaults.candidates_file),
        notification_timeout_ms: config
            .notification_timeout_ms
            .unwrap_or(defaults.notification_timeout_ms),
        search_delay_ms: config.search_delay_ms.unwrap_or(defaults.search_delay_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `SUBURB_SEARCH_CANDIDATES` for the candidate file.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(CANDIDATES_ENV_VAR) {
        config.candidates_file = Some(PathBuf::from(path));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually
/// passed override anything.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    candidates_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(path) = candidates_override {
        config.candidates_file = Some(path);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
