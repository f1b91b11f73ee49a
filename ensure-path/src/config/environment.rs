//! `ENSURE_PATH_*` environment variable overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Applies environment variable overrides to a configuration.
///
/// | Variable                       | Field             |
/// |--------------------------------|-------------------|
/// | `ENSURE_PATH_VARIABLE`         | `variable`        |
/// | `ENSURE_PATH_ANY_POSITION`     | `any_position`    |
/// | `ENSURE_PATH_REMOVE_EMPTY`     | `remove_empty`    |
/// | `ENSURE_PATH_DELETE_MATCHING`  | `delete_matching` |
/// | `ENSURE_PATH_MAX_INPUT_BYTES`  | `max_input_bytes` |
///
/// # Examples
///
/// ```no_run
/// use ensure_path::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Overwrites fields of `config` with any `ENSURE_PATH_*` variables set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a boolean or numeric variable cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(variable) = env::var("ENSURE_PATH_VARIABLE") {
            config.variable = Some(variable);
        }

        if let Ok(val) = env::var("ENSURE_PATH_ANY_POSITION") {
            config.any_position = Some(Self::parse_bool("ENSURE_PATH_ANY_POSITION", &val)?);
        }

        if let Ok(val) = env::var("ENSURE_PATH_REMOVE_EMPTY") {
            config.remove_empty = Some(Self::parse_bool("ENSURE_PATH_REMOVE_EMPTY", &val)?);
        }

        if let Ok(substring) = env::var("ENSURE_PATH_DELETE_MATCHING") {
            config.delete_matching = Some(substring);
        }

        if let Ok(bytes) = env::var("ENSURE_PATH_MAX_INPUT_BYTES") {
            config.max_input_bytes = Some(bytes.trim().parse().map_err(|_| Error::Validation {
                field: "ENSURE_PATH_MAX_INPUT_BYTES".into(),
                message: format!("Must be a positive integer, got '{bytes}'"),
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
