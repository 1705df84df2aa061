//! End-to-end tests that run the `degreeplanner` binary

use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with its config directory pointed at a temp dir
fn run_cli(args: &[&str]) -> (TempDir, Output) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_degreeplanner"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .output()
        .expect("Failed to run degreeplanner");
    (home, output)
}

#[test]
fn test_requirements_json_is_parseable_with_unknown_code() {
    let (_home, output) = run_cli(&[
        "-v",
        "--log-level",
        "info",
        "requirements",
        "--catalog",
        "samples/catalog.json",
        "--json",
        "CMSC 201",
        "FOO 999",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let summary: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be a single JSON document");
    assert!(summary["groups"].is_array());
    assert!(summary["overall_percent"].is_u64());
    assert!(!stdout.contains("FOO 999"));
}

#[test]
fn test_requirements_table_notes_unknown_code() {
    let (_home, output) = run_cli(&[
        "-v",
        "requirements",
        "--catalog",
        "samples/catalog.json",
        "FOO 999",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Note: FOO 999 is not in the catalog"));
    assert!(stdout.contains("=== Requirements ==="));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_home, output) = run_cli(&["config", "set", "nope", "value"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("✗"));
}

#[test]
fn test_config_set_catalog_reports_missing_file() {
    let (home, output) = run_cli(&["config", "set", "catalog", "/no/such/catalog.json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Set catalog = /no/such/catalog.json"));
    assert!(stdout.contains("does not exist yet"));
    assert!(home.path().join(".config").exists() || home.path().join("Library").exists());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_home, output) = run_cli(&["config", "get", "nope"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown config key"));
}
