//! Integration tests for the notetree CLI surface: help, flags, errors

mod support;

use predicates::prelude::*;
use support::{notetree, notetree_in};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    notetree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: notetree"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("tag"));
}

#[test]
fn test_version_flag() {
    notetree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    notetree_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notetree --help"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_unknown_subcommand_exit_code() {
    notetree().arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_format_json_envelope() {
    notetree()
        .args(["--format", "json", "--format", "xml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_missing_title_is_usage_error() {
    let dir = tempdir().unwrap();
    notetree_in(dir.path()).arg("add").assert().code(2);
}

#[test]
fn test_invalid_tag_is_usage_error() {
    let dir = tempdir().unwrap();
    notetree_in(dir.path())
        .args(["add", "Tagged", "--tag", "a,b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: invalid"));
}

// ============================================================================
// Data errors
// ============================================================================

#[test]
fn test_missing_note_exit_code() {
    let dir = tempdir().unwrap();
    notetree_in(dir.path())
        .args(["show", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found"));
}

#[test]
fn test_missing_note_json_envelope() {
    let dir = tempdir().unwrap();
    let output = notetree_in(dir.path())
        .args(["--format", "json", "show", "ghost"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "note_not_found");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    notetree_in(dir.path())
        .args(["--quiet", "delete", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_file_as_root_is_invalid_store() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    notetree_in(&file)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid store"));
}

// ============================================================================
// Root selection
// ============================================================================

#[test]
fn test_dir_from_environment() {
    let dir = tempdir().unwrap();
    notetree()
        .env("NOTETREE_DIR", dir.path())
        .args(["add", "From Env"])
        .assert()
        .success()
        .stdout("from_env.md\n");
    assert!(dir.path().join("from_env.md").is_file());
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    notetree()
        .env_remove("NOTETREE_DIR")
        .current_dir(dir.path())
        .args(["add", "Here"])
        .assert()
        .success();
    assert!(dir.path().join("here.md").is_file());
}
