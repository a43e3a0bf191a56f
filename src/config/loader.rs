//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PRODCAT_CONFIG";

/// Environment variable naming a catalog data file.
pub const DATA_ENV: &str = "PRODCAT_DATA";

/// Conventional variable that disables colour output when set and non-empty.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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
/// Corresponds to `~/.config/prodcat/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Catalog JSON file to load instead of the embedded fixture.
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Colour output. `false` renders the TUI monochrome.
    #[serde(default)]
    pub color: Option<bool>,

    /// Search text applied at startup.
    #[serde(default)]
    pub initial_search: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Catalog file, or `None` for the embedded fixture.
    pub data_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Whether to render with colour.
    pub color: bool,
    /// Initial search text, if any.
    pub initial_search: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_file_path: default_log_path(),
            color: true,
            initial_search: None,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/prodcat/prodcat.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("prodcat").join("prodcat.log")
    } else {
        PathBuf::from("prodcat.log")
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
/// Returns `~/.config/prodcat/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prodcat").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PRODCAT_CONFIG` environment variable
/// 3. Default path `~/.config/prodcat/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        data_path: config.data_path.or(defaults.data_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        color: config.color.unwrap_or(defaults.color),
        initial_search: config.initial_search.or(defaults.initial_search),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PRODCAT_DATA`: catalog file path
/// - `NO_COLOR`: any non-empty value disables colour
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        config.data_path = Some(PathBuf::from(path));
    }

    if std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
        config.color = false;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user;
/// `--no-color` can only turn colour off.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_override: Option<PathBuf>,
    search_override: Option<String>,
    no_color: bool,
) -> ResolvedConfig {
    if let Some(path) = data_override {
        config.data_path = Some(path);
    }

    if let Some(search) = search_override {
        config.initial_search = Some(search);
    }

    if no_color {
        config.color = false;
    }

    config
}

/// Run the whole precedence chain.
///
/// Runs before logging is initialised (the log path is part of the
/// result), so it logs nothing itself.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed.
pub fn resolve(
    config_path: Option<PathBuf>,
    data_override: Option<PathBuf>,
    search_override: Option<String>,
    no_color: bool,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    Ok(apply_cli_overrides(
        apply_env_overrides(merge_config(file)),
        data_override,
        search_override,
        no_color,
    ))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
