//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_cellgrid_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("cellgrid") && path_str.ends_with("config.toml"),
        "Path should contain 'cellgrid' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_cellgrid_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("cellgrid.log"),
        "Default log path should end with 'cellgrid.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("cellgrid_test_config.toml");

    let toml_content = r##"
row_height = 32
column_width = 120
cell_pixel_width = 10
cell_pixel_height = 20
log_file_path = "/tmp/cellgrid-test.log"
log_filter = "cellgrid=warn"
cache_log_level = "debug"

[palette]
text = "yellow"
selection = "#005f87"
hint = "gray"
"##;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.row_height, Some(32));
    assert_eq!(config.column_width, Some(120));
    assert_eq!(config.cell_pixel_width, Some(10));
    assert_eq!(config.cell_pixel_height, Some(20));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/cellgrid-test.log"))
    );
    let palette = config.palette.expect("palette section");
    assert_eq!(palette.text, Some(Color::Yellow));
    assert_eq!(palette.selection, Some(Color::Rgb(0x00, 0x5f, 0x87)));
    assert_eq!(palette.hint, Some(Color::Gray));
    assert_eq!(palette.background, None);
    assert_eq!(config.log_filter.as_deref(), Some("cellgrid=warn"));
    assert_eq!(config.cache_log_level.as_deref(), Some("debug"));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("cellgrid_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write test config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let toml_with_unknown = r#"
row_height = 20
unknown_field = "should fail"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_unknown);
    assert!(
        result.is_err(),
        "Should reject TOML with unknown fields due to deny_unknown_fields"
    );
}

#[test]
fn palette_rejects_unknown_colour() {
    let result: Result<ConfigFile, _> = toml::from_str("[palette]\ntext = \"not-a-colour\"\n");
    assert!(result.is_err());
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        column_width: Some(200),
        palette: Some(PaletteSection {
            active: Some(Color::Red),
            ..PaletteSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.column_width, 200);
    assert_eq!(resolved.row_height, defaults.row_height);
    assert_eq!(resolved.cell_pixel_width, defaults.cell_pixel_width);
    assert_eq!(resolved.palette.active, Color::Red);
    assert_eq!(resolved.palette.text, defaults.palette.text);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn gui_context_follows_cell_size() {
    let config = ResolvedConfig {
        cell_pixel_width: 0,
        cell_pixel_height: 12,
        ..ResolvedConfig::default()
    };

    assert_eq!(config.cell_size(), Size::new(1, 12));
    let ctx = config.gui_context();
    assert_eq!((ctx.char_width, ctx.line_height), (1, 12));
}

#[test]
fn apply_cli_overrides_only_touches_given_flags() {
    let base = ResolvedConfig::default();

    let result = apply_cli_overrides(base.clone(), Some(40), None, None);

    assert_eq!(result.row_height, 40);
    assert_eq!(result.column_width, base.column_width);
    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}

#[test]
fn cache_log_level_flows_from_file_to_cli() {
    let config_file = ConfigFile {
        log_filter: Some("warn".to_string()),
        cache_log_level: Some("debug".to_string()),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(config_file));
    assert_eq!(merged.log_filter, "warn");
    assert_eq!(merged.cache_log_level.as_deref(), Some("debug"));

    let kept = apply_cli_overrides(merged.clone(), None, None, None);
    assert_eq!(kept.cache_log_level.as_deref(), Some("debug"));

    let overridden = apply_cli_overrides(merged, None, None, Some("trace".to_string()));
    assert_eq!(overridden.cache_log_level.as_deref(), Some("trace"));
}

#[test]
fn default_log_filter_hides_cache_events() {
    let defaults = ResolvedConfig::default();
    assert_eq!(defaults.log_filter, "info");
    assert_eq!(defaults.cache_log_level, None);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(cellgrid_log_file)]
fn apply_env_overrides_respects_log_file_var() {
    let _guard = EnvGuard::new(LOG_FILE_ENV_VAR);
    env::set_var(LOG_FILE_ENV_VAR, "/tmp/override.log");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.log_file_path, PathBuf::from("/tmp/override.log"));
}

#[test]
#[serial(cellgrid_log_file)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(LOG_FILE_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(cellgrid_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("cellgrid_explicit.toml");
    fs::write(&explicit_path, "row_height = 11\n").expect("Failed to write explicit config");

    let env_path = temp_dir.join("cellgrid_env.toml");
    fs::write(&env_path, "row_height = 22\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("explicit config parses")
        .expect("explicit config exists");
    assert_eq!(
        config.row_height,
        Some(11),
        "Should use explicit path, not CELLGRID_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(cellgrid_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("cellgrid_env_only.toml");
    fs::write(&env_path, "column_width = 64\n").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("env config parses")
        .expect("env config exists");
    assert_eq!(config.column_width, Some(64));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(cellgrid_config)]
fn load_config_with_precedence_missing_env_file_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/cellgrid/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}
