//! Integration tests for the config subcommands

use predicates::prelude::*;
use tempfile::TempDir;

use autocue::Config;

use crate::helpers::autocue;

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    autocue(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    autocue(&path).args(["config", "init"]).assert().success();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    autocue(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    autocue(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_effective_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\nborder_policy = \"initial\"\n").unwrap();

    autocue(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("border_policy = \"initial\""))
        .stdout(predicate::str::contains("tick_interval_ms = 250"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[playback]\nspeed = \"fast\"\n").unwrap();

    autocue(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
