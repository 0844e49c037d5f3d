//! Configuration module.
//!
//! Settings come from, in increasing precedence: built-in defaults, the
//! TOML config file, environment variables, and CLI flags.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    PaletteSection, ResolvedConfig, CONFIG_ENV_VAR, LOG_FILE_ENV_VAR,
};
