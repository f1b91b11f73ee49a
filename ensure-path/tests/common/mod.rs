//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixtures for testing the
//! ensure-path library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ensure_path::{NormalizeOptions, DELIMITER};

/// A realistic login-shell `PATH` used as a fixture.
#[allow(dead_code)]
pub const SAMPLE_PATH: &str =
    "/home/me/.cargo/bin:/usr/local/bin:/usr/bin:/bin:/usr/local/sbin:/usr/sbin:/snap/bin";

/// Builder for normalizer options with test-friendly defaults.
///
/// Unlike [`NormalizeOptions::new`], the fixture defaults to presence-only
/// mode so each test states explicitly when it wants the entry first.
#[allow(dead_code)]
pub struct OptionsFixture {
    entry: String,
    ensure_first: bool,
    remove_empty: bool,
    remove_matching: Option<String>,
}

#[allow(dead_code)]
impl OptionsFixture {
    /// Creates a fixture for `entry` in presence-only mode.
    pub fn new(entry: &str) -> Self {
        Self {
            entry: entry.to_string(),
            ensure_first: false,
            remove_empty: false,
            remove_matching: None,
        }
    }

    /// Require the entry first.
    pub fn first(mut self) -> Self {
        self.ensure_first = true;
        self
    }

    /// Strip blank segments.
    pub fn remove_empty(mut self) -> Self {
        self.remove_empty = true;
        self
    }

    /// Delete segments containing `substring`.
    pub fn deleting(mut self, substring: &str) -> Self {
        self.remove_matching = Some(substring.to_string());
        self
    }

    /// Builds the options.
    pub fn build(self) -> NormalizeOptions {
        NormalizeOptions::new(self.entry)
            .with_ensure_first(self.ensure_first)
            .with_remove_empty(self.remove_empty)
            .with_remove_matching(self.remove_matching)
    }
}

/// Counts how often `entry` occurs as a whole segment of `path`.
#[allow(dead_code)]
pub fn count_entry(path: &str, entry: &str) -> usize {
    path.split(DELIMITER).filter(|s| *s == entry).count()
}

/// Writes a configuration file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this guard must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn unset(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(&self.key, value),
            None => env::remove_var(&self.key),
        }
    }
}
