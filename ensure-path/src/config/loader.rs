//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user configuration.
pub const USER_CONFIG_DIR: &str = ".ensure-path";

/// File name of the user configuration.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// A configuration file together with its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use ensure_path::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the explicit configuration file, or the user file if none is
    /// given.
    ///
    /// An explicit file must exist. The user file at
    /// `~/.ensure-path/config.yaml` is optional: if it (or the home
    /// directory) is missing, `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file that
    /// exists cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            return Ok(Some(ConfigSource {
                path: path.to_path_buf(),
                config,
            }));
        }

        let Some(path) = Self::user_config_path() else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };

        if !path.exists() {
            log::debug!("no user configuration at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/ensure-path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        assert!(ConfigLoader::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(err.to_string().contains("Invalid YAML"));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.yaml");
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "variable: MANPATH\n").unwrap();

        let source = ConfigLoader::load(Some(&config_path)).unwrap().unwrap();
        assert_eq!(source.path, config_path);
        assert_eq!(source.config.variable(), "MANPATH");
    }

    #[test]
    fn test_user_config_path_location() {
        if let Some(path) = ConfigLoader::user_config_path() {
            assert!(path.ends_with(".ensure-path/config.yaml"));
        }
    }
}
