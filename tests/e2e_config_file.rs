/// End-to-end tests for config file discovery and CLI option merging.
///
/// These tests run the binary against a report and a config file written into
/// a temporary directory, using `assert_cmd` and `tempfile`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a report with a project, a directory, and a file lacking a uuid.
fn write_report(dir: &Path) -> PathBuf {
    let report = r#"{
    "rootRef": 1,
    "components": [
        {"ref": 1, "type": "PROJECT", "key": "proj", "name": "Project", "uuid": "P",
         "children": [2]},
        {"ref": 2, "type": "DIRECTORY", "key": "proj:src", "name": "src", "uuid": "D1",
         "children": [3]},
        {"ref": 3, "type": "FILE", "key": "proj:src/Foo", "name": "Foo.lang",
         "language": "lang", "lines": 42}
    ]
}"#;
    let path = dir.join("report.json");
    fs::write(&path, report).unwrap();
    path
}

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_config_next_to_report_is_discovered() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    write_config(dir.path(), "component-tree.config.yml", "format: json\n");

    let output = cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root"]["uuid"], "P");
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    let config = write_config(dir.path(), "custom.yml", "max_depth: DIRECTORY\n");

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("src [DIRECTORY] proj:src"))
        .stdout(predicate::str::contains("Foo.lang [FILE]").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .arg("-c")
        .arg(dir.path().join("missing.yml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    write_config(dir.path(), "component-tree.config.yml", "format: json\n");

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .args(["-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Project [PROJECT] proj"));
}

#[test]
fn test_config_disables_uuid_generation() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    write_config(
        dir.path(),
        "component-tree.config.yml",
        "generate_missing_uuids: false\n",
    );

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("proj:src/Foo"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_config_value_fails() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    write_config(dir.path(), "component-tree.config.yml", "format: xml\n");

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config: format"));
}

#[test]
fn test_unknown_config_field_warns_on_stderr() {
    let dir = TempDir::new().unwrap();
    let report = write_report(dir.path());
    write_config(
        dir.path(),
        "component-tree.config.yml",
        "format: text\ncolour: true\n",
    );

    cargo_bin_cmd!("component-tree")
        .arg("-r")
        .arg(&report)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config field 'colour'"));
}
