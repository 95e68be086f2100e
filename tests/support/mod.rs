use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for notetree
pub fn notetree() -> Command {
    cargo_bin_cmd!("notetree")
}

/// A notetree command rooted at `dir` via `--dir`
pub fn notetree_in(dir: &Path) -> Command {
    let mut cmd = notetree();
    cmd.env_remove("NOTETREE_DIR").arg("--dir").arg(dir);
    cmd
}

/// Add a note and return the path printed by `add`
#[allow(dead_code)]
pub fn add_note(dir: &TempDir, args: &[&str]) -> String {
    let output = notetree_in(dir.path())
        .arg("add")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Read a file below the storage root
#[allow(dead_code)]
pub fn read(dir: &TempDir, rel: &str) -> String {
    fs::read_to_string(dir.path().join(rel)).unwrap()
}

/// Parse stdout of a successful JSON command
#[allow(dead_code)]
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
