//! Configuration schema.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered with [`Config::merge`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::source::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_VARIABLE};

/// Persistent defaults for the ensure-path tool.
///
/// # Examples
///
/// ```
/// use ensure_path::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "variable: MANPATH\nremove_empty: true\n",
/// ).unwrap();
///
/// assert_eq!(config.variable(), "MANPATH");
/// assert!(config.remove_empty());
/// assert!(!config.any_position());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment variable holding the path string.
    pub variable: Option<String>,

    /// Only ensure presence instead of forcing the entry first.
    pub any_position: Option<bool>,

    /// Strip empty and whitespace-only segments.
    pub remove_empty: Option<bool>,

    /// Delete segments containing this substring.
    pub delete_matching: Option<String>,

    /// Maximum number of bytes accepted on standard input.
    pub max_input_bytes: Option<usize>,
}

impl Config {
    /// Layers `other` on top of `self`; fields set in `other` win.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::Config;
    ///
    /// let base = Config { remove_empty: Some(true), ..Default::default() };
    /// let top = Config { variable: Some("MANPATH".into()), ..Default::default() };
    ///
    /// let merged = base.merge(top);
    /// assert_eq!(merged.variable.as_deref(), Some("MANPATH"));
    /// assert_eq!(merged.remove_empty, Some(true));
    /// ```
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            variable: other.variable.or(self.variable),
            any_position: other.any_position.or(self.any_position),
            remove_empty: other.remove_empty.or(self.remove_empty),
            delete_matching: other.delete_matching.or(self.delete_matching),
            max_input_bytes: other.max_input_bytes.or(self.max_input_bytes),
        }
    }

    /// Checks the configuration for values that can never be intended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if:
    /// - `delete_matching` is empty (it would delete every segment)
    /// - `max_input_bytes` is zero
    ///
    /// `variable` is checked by [`PathSource::environment`] only when the
    /// path is actually read from the environment.
    ///
    /// [`PathSource::environment`]: crate::PathSource::environment
    pub fn validate(&self) -> Result<()> {
        if self.delete_matching.as_deref() == Some("") {
            return Err(Self::invalid(
                "delete_matching",
                "must not be empty (an empty substring matches every segment)",
            ));
        }

        if self.max_input_bytes == Some(0) {
            return Err(Self::invalid("max_input_bytes", "must be greater than zero"));
        }

        Ok(())
    }

    fn invalid(field: &str, message: &str) -> Error {
        Error::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Environment variable to read, defaulting to `PATH`.
    #[must_use]
    pub fn variable(&self) -> &str {
        self.variable.as_deref().unwrap_or(DEFAULT_VARIABLE)
    }

    /// Whether presence anywhere is enough.
    #[must_use]
    pub fn any_position(&self) -> bool {
        self.any_position.unwrap_or(false)
    }

    /// Whether blank segments are stripped.
    #[must_use]
    pub fn remove_empty(&self) -> bool {
        self.remove_empty.unwrap_or(false)
    }

    /// Substring for segment deletion, if any.
    #[must_use]
    pub fn delete_matching(&self) -> Option<&str> {
        self.delete_matching.as_deref()
    }

    /// Standard input size limit, defaulting to 10 KiB.
    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES)
    }
}
