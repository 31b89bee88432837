//! Integration tests for the `taskit` binary.
//!
//! Only the start-up path is exercised here: every case below exits before
//! the terminal is taken over.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the built `taskit` binary.
fn taskit_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("taskit");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(taskit_bin())
        .args(args)
        .output()
        .expect("failed to run taskit")
}

#[test]
fn version_flag_prints_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_flags() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Task-It Easy"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let output = run(&["--config", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr was: {}", stderr);
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn malformed_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskit.toml");
    fs::write(&path, "[ui\nshow_key_hints = maybe\n").unwrap();
    let output = run(&["--config", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr was: {}", stderr);
}

#[test]
fn bad_log_level_fails_before_tui() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("taskit.toml");
    fs::write(&config, "[ui]\nshow_key_hints = false\n").unwrap();
    let log = dir.path().join("taskit.log");
    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "--log-file",
        log.to_str().unwrap(),
        "--log-level",
        "taskit=loud",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error:"), "stderr was: {}", stderr);
}
