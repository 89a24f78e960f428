//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Isolated test environment.
///
/// Each test gets its own configuration directory, so a table left behind by
/// one test is never discovered by another.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn config_home(&self) -> PathBuf {
    self.temp.path().join("config")
  }

  /// Path of the table `modrules init` writes by default.
  pub fn default_table(&self) -> PathBuf {
    self.config_home().join("modrules").join("modules.json")
  }

  pub fn path(&self, relative: &str) -> PathBuf {
    self.temp.path().join(relative)
  }

  /// A command with an isolated environment.
  pub fn cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("modrules");
    cmd
      .env("XDG_CONFIG_HOME", self.config_home())
      .env("APPDATA", self.config_home())
      .env_remove("MODRULES_TABLE")
      .env_remove("RUST_LOG");
    cmd
  }

  /// Run `modrules -o json <args>` and parse stdout.
  pub fn json<I, S>(&self, args: I) -> serde_json::Value
  where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
  {
    let output = self.cmd().args(["-o", "json"]).args(args).output().unwrap();
    assert!(
      output.status.success(),
      "command failed: {}",
      String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
  }
}

/// Collect a JSON array of strings.
pub fn strings(value: &serde_json::Value) -> Vec<String> {
  value
    .as_array()
    .unwrap_or_else(|| panic!("expected array, got {}", value))
    .iter()
    .map(|v| v.as_str().unwrap().to_string())
    .collect()
}
