//! Configuration file loading with precedence handling.

use crate::model::{DatasetBounds, ScaleError};
use crate::state::NavigatorSettings;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EPOCHLINE_CONFIG";

/// Environment variable naming the dataset file.
pub const DATASET_ENV_VAR: &str = "EPOCHLINE_DATASET";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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
/// Corresponds to `~/.config/epochline/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Dataset JSON file; the bundled dataset is used when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Earliest year of the timeline.
    #[serde(default)]
    pub min_year: Option<i64>,

    /// Latest year of the timeline.
    #[serde(default)]
    pub max_year: Option<i64>,

    /// Year where the full-view axis switches from the compressed to the
    /// expanded segment.
    #[serde(default)]
    pub breakpoint_year: Option<i64>,

    /// Share of the full-view axis taken by years before the breakpoint.
    #[serde(default)]
    pub segment1_ratio: Option<f64>,

    /// Narrowest span, in years, the overview can zoom to.
    #[serde(default)]
    pub min_zoom_span: Option<i64>,

    /// Span multiplier for one zoom-in step.
    #[serde(default)]
    pub zoom_in_factor: Option<f64>,

    /// Span multiplier for one zoom-out step.
    #[serde(default)]
    pub zoom_out_factor: Option<f64>,

    /// Fraction of the span moved by one pan step.
    #[serde(default)]
    pub pan_fraction: Option<f64>,

    /// Percent of the axis on each side where off-axis markers are kept.
    #[serde(default)]
    pub overscan_percent: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Dataset file, `None` for the bundled dataset.
    pub dataset: Option<PathBuf>,
    /// Earliest year of the timeline.
    pub min_year: i64,
    /// Latest year of the timeline.
    pub max_year: i64,
    /// Scale and navigation tunables.
    pub navigator: NavigatorSettings,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Disable colors.
    pub no_color: bool,
}

impl ResolvedConfig {
    /// Dataset bounds from the configured years.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidBounds`] for an empty, inverted or out-of-range
    /// interval.
    pub fn bounds(&self) -> Result<DatasetBounds, ScaleError> {
        DatasetBounds::new(self.min_year, self.max_year)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let bounds = DatasetBounds::default();
        Self {
            dataset: None,
            min_year: bounds.min_year(),
            max_year: bounds.max_year(),
            navigator: NavigatorSettings::default(),
            log_file_path: default_log_path(),
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/epochline/epochline.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("epochline").join("epochline.log")
    } else {
        PathBuf::from("epochline.log")
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
/// Returns `~/.config/epochline/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("epochline").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EPOCHLINE_CONFIG` environment variable
/// 3. Default path `~/.config/epochline/config.toml`
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

/// Apply environment variable overrides to resolved config.
///
/// Checks `EPOCHLINE_DATASET`; an empty value is ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(dataset) = std::env::var(DATASET_ENV_VAR) {
        if !dataset.is_empty() {
            config.dataset = Some(PathBuf::from(dataset));
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let nav = defaults.navigator;
    ResolvedConfig {
        dataset: config.dataset.or(defaults.dataset),
        min_year: config.min_year.unwrap_or(defaults.min_year),
        max_year: config.max_year.unwrap_or(defaults.max_year),
        navigator: NavigatorSettings {
            breakpoint_year: config.breakpoint_year.unwrap_or(nav.breakpoint_year),
            segment1_ratio: config.segment1_ratio.unwrap_or(nav.segment1_ratio),
            min_zoom_span: config.min_zoom_span.unwrap_or(nav.min_zoom_span),
            zoom_in_factor: config.zoom_in_factor.unwrap_or(nav.zoom_in_factor),
            zoom_out_factor: config.zoom_out_factor.unwrap_or(nav.zoom_out_factor),
            pan_fraction: config.pan_fraction.unwrap_or(nav.pan_fraction),
            overscan_percent: config.overscan_percent.unwrap_or(nav.overscan_percent),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    dataset_override: Option<PathBuf>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(dataset) = dataset_override {
        config.dataset = Some(dataset);
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
