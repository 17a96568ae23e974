//! Shared test helpers

use std::path::{Path, PathBuf};

use assert_cmd::Command;

use autocue::MediaDescriptor;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture descriptor, panicking on any error.
pub fn load_fixture(name: &str) -> MediaDescriptor {
    MediaDescriptor::load(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {} failed to load: {}", name, e))
}

/// The autocue binary with colors off and config pointed at `config`.
pub fn autocue(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("autocue").expect("autocue binary");
    cmd.env("NO_COLOR", "1")
        .env("AUTOCUE_CONFIG", config)
        .env_remove("RUST_LOG");
    cmd
}
