//! Integration tests for the autocue CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{autocue, fixture_path};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_documents_keys() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"))
        .stdout(predicate::str::contains("--border-policy"))
        .stdout(predicate::str::contains("pause / resume"));
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn inspect_prints_window_and_table() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .arg("inspect")
        .arg(fixture_path("scenario.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("window  [0, 2]  0.000s - 9.000s"))
        .stdout(predicate::str::contains("mount   set-media (1 source(s)), play @ 0.000"))
        .stdout(predicate::str::contains(">   0    0.000   2.000  ksand_01uk  ja så"));
}

#[test]
fn inspect_ticks_trace_advance_and_overrun() {
    let dir = TempDir::new().unwrap();
    let output = autocue(&dir.path().join("config.toml"))
        .arg("inspect")
        .arg(fixture_path("scenario.json"))
        .args(["--ticks", "2.5", "9.1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("t=   2.500  advance 0 -> 1"));
    assert!(stdout.contains("t=   9.100  overrun, rewind to 0.000  line 0     play @ 0.000, pause"));
    assert!(stdout.contains(">   0    0.000   2.000  ksand_01uk  ja så"));
}

#[test]
fn inspect_context_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[playback]\ncontext_lines = 2\n").unwrap();

    autocue(&config)
        .arg("inspect")
        .arg(fixture_path("long.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("window  [38, 52]"));

    autocue(&config)
        .arg("inspect")
        .arg(fixture_path("long.json"))
        .args(["--context", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("window  [0, 100]"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn inspect_invalid_descriptor_fails() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .arg("inspect")
        .arg(fixture_path("inverted_bounds.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load"))
        .stderr(predicate::str::contains("minStart"));
}

#[test]
fn inspect_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .args(["inspect", "no_such_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.json"));
}

#[test]
fn missing_file_argument_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .arg("inspect")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    autocue(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("autocue"));
}
