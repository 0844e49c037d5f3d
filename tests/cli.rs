//! Integration test: run the binary and read the rendered frame from stdout.

use std::process::Command;

fn cellgrid() -> Command {
    let log = std::env::temp_dir().join("cellgrid_cli_test").join("cli.log");
    let mut command = Command::new(env!("CARGO_BIN_EXE_cellgrid"));
    command
        .env("CELLGRID_CONFIG", "/nonexistent/cellgrid/config.toml")
        .env("CELLGRID_LOG_FILE", log);
    command
}

#[test]
fn binary_prints_version() {
    let output = cellgrid()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected version in output, got: {}",
        stdout
    );
}

#[test]
fn binary_renders_requested_frame() {
    let output = cellgrid()
        .args([
            "--rows", "10", "--columns", "4", "--width", "24", "--height", "2", "--scroll-y",
            "32",
        ])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Item [2, 0] Item [2, 1]", "Item [3, 0] Item [3, 1]"]);
}

#[test]
fn binary_reports_invalid_config() {
    let config = std::env::temp_dir().join("cellgrid_cli_bad_config.toml");
    std::fs::write(&config, "row_height = \"tall\"\n").expect("Failed to write config");

    let output = cellgrid()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ParseError"), "stderr: {}", stderr);

    std::fs::remove_file(config).ok();
}

#[test]
fn cache_log_level_writes_rebuilds_to_log_file() {
    let log = std::env::temp_dir()
        .join("cellgrid_cli_cache_log")
        .join("cache.log");
    std::fs::remove_file(&log).ok();

    let output = cellgrid()
        .env("CELLGRID_LOG_FILE", &log)
        .env_remove("RUST_LOG")
        .args(["--rows", "10", "--columns", "4", "--width", "24", "--height", "2"])
        .args(["--cache-log-level", "debug"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let contents = std::fs::read_to_string(&log).expect("log file written");
    assert!(contents.contains("Rebuilt viewport cache"), "log: {}", contents);
}
