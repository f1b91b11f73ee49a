//! Common test utilities for CLI integration tests.
//!
//! Every command runs with HOME pointed at a temporary directory and the
//! `ENSURE_PATH_*` variables removed, so the developer's own configuration
//! never leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads besides the path itself.
const CONFIG_VARIABLES: &[&str] = &[
    "ENSURE_PATH_CONFIG",
    "ENSURE_PATH_LOG_MODE",
    "ENSURE_PATH_VARIABLE",
    "ENSURE_PATH_ANY_POSITION",
    "ENSURE_PATH_REMOVE_EMPTY",
    "ENSURE_PATH_DELETE_MATCHING",
    "ENSURE_PATH_MAX_INPUT_BYTES",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path used as HOME for every command
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Command for the binary with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ensure-path").expect("Failed to find ensure-path binary");
        cmd.env("HOME", &self.home);
        for name in CONFIG_VARIABLES {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Command that reads `path` from `$PATH`.
    pub fn with_path(&self, path: &str) -> Command {
        let mut cmd = self.command();
        cmd.env("PATH", path);
        cmd
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the per-user configuration file under HOME.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(".ensure-path/config.yaml", contents)
    }

    /// Get the home path.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

/// Stdout of a successful run, as a string.
#[allow(dead_code)]
pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run ensure-path");
    assert!(
        output.status.success(),
        "ensure-path failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
}
