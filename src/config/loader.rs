//! Configuration file loading with precedence handling.

use crate::logging::DEFAULT_FILTER;
use crate::model::Size;
use crate::render::{GuiContext, Palette};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "CELLGRID_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV_VAR: &str = "CELLGRID_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// Corresponds to `~/.config/cellgrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Row height in pixels.
    #[serde(default)]
    pub row_height: Option<u32>,

    /// Column width in pixels.
    #[serde(default)]
    pub column_width: Option<u32>,

    /// Pixel width of one terminal cell (also one text column).
    #[serde(default)]
    pub cell_pixel_width: Option<u16>,

    /// Pixel height of one terminal cell (also one text line).
    #[serde(default)]
    pub cell_pixel_height: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Tracing filter directives, used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Level for the viewport cache's rebuild events (e.g. `"debug"`).
    #[serde(default)]
    pub cache_log_level: Option<String>,

    /// Colours.
    #[serde(default)]
    pub palette: Option<PaletteSection>,
}

/// Palette section from TOML.
///
/// Colours use ratatui's names or `#rrggbb`:
/// ```toml
/// [palette]
/// text = "white"
/// selection = "#005f87"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PaletteSection {
    /// Cell background.
    #[serde(default)]
    pub background: Option<Color>,

    /// Text colour.
    #[serde(default)]
    pub text: Option<Color>,

    /// Selected cell background.
    #[serde(default)]
    pub selection: Option<Color>,

    /// Active cell background.
    #[serde(default)]
    pub active: Option<Color>,

    /// Hint text colour.
    #[serde(default)]
    pub hint: Option<Color>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Row height in pixels.
    pub row_height: u32,
    /// Column width in pixels.
    pub column_width: u32,
    /// Pixel width of one terminal cell.
    pub cell_pixel_width: u16,
    /// Pixel height of one terminal cell.
    pub cell_pixel_height: u16,
    /// Colours.
    pub palette: Palette,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Tracing filter directives.
    pub log_filter: String,
    /// Level override for the viewport cache target.
    pub cache_log_level: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            row_height: 16,
            column_width: 96,
            cell_pixel_width: 8,
            cell_pixel_height: 16,
            palette: Palette::default(),
            log_file_path: default_log_path(),
            log_filter: DEFAULT_FILTER.to_string(),
            cache_log_level: None,
        }
    }
}

impl ResolvedConfig {
    /// Pixel size of one terminal cell, at least 1x1.
    pub fn cell_size(&self) -> Size {
        Size::new(
            i32::from(self.cell_pixel_width.max(1)),
            i32::from(self.cell_pixel_height.max(1)),
        )
    }

    /// Drawing context: one text column per terminal cell.
    pub fn gui_context(&self) -> GuiContext {
        let cell = self.cell_size();
        GuiContext {
            palette: self.palette,
            char_width: cell.width,
            line_height: cell.height,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cellgrid/cellgrid.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("cellgrid").join("cellgrid.log"),
        None => PathBuf::from("cellgrid.log"),
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
/// Returns `~/.config/cellgrid/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cellgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CELLGRID_CONFIG` environment variable
/// 3. Default path `~/.config/cellgrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `CELLGRID_CONFIG` is not valid unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()))
        }
        Err(std::env::VarError::NotPresent) => {}
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CELLGRID_LOG_FILE`: Override log file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(LOG_FILE_ENV_VAR) {
        config.log_file_path = PathBuf::from(path);
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

    let palette = config.palette.unwrap_or_default();
    ResolvedConfig {
        row_height: config.row_height.unwrap_or(defaults.row_height),
        column_width: config.column_width.unwrap_or(defaults.column_width),
        cell_pixel_width: config.cell_pixel_width.unwrap_or(defaults.cell_pixel_width),
        cell_pixel_height: config
            .cell_pixel_height
            .unwrap_or(defaults.cell_pixel_height),
        palette: Palette {
            background: palette.background.unwrap_or(defaults.palette.background),
            text: palette.text.unwrap_or(defaults.palette.text),
            selection: palette.selection.unwrap_or(defaults.palette.selection),
            active: palette.active.unwrap_or(defaults.palette.active),
            hint: palette.hint.unwrap_or(defaults.palette.hint),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_filter: config.log_filter.unwrap_or(defaults.log_filter),
        cache_log_level: config.cache_log_level.or(defaults.cache_log_level),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    row_height_override: Option<u32>,
    column_width_override: Option<u32>,
    cache_log_level_override: Option<String>,
) -> ResolvedConfig {
    if let Some(row_height) = row_height_override {
        config.row_height = row_height;
    }

    if let Some(column_width) = column_width_override {
        config.column_width = column_width;
    }

    if cache_log_level_override.is_some() {
        config.cache_log_level = cache_log_level_override;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
