//! Error types for the ensure-path library.
//!
//! The path normalizer itself is total and never fails. Everything that can
//! go wrong lives around it: acquiring the input path string and loading
//! configuration. Those failures are described here using `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an ensure-path error.
///
/// # Examples
///
/// ```
/// use ensure_path::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(10 * 1024)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the ensure-path library.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input held more bytes than the configured limit.
    #[error("standard input contained more than {limit} bytes; this is probably not intended")]
    InputTooLarge {
        /// The byte limit that was exceeded.
        limit: usize,
    },

    /// Standard input was requested but is attached to an interactive terminal.
    #[error("standard input is an interactive terminal; pipe a path into it or drop --stdin")]
    InteractiveInput,

    /// The input path string could not be decoded.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// An environment variable holds a value that is not valid Unicode.
    #[error("environment variable {name} does not contain valid Unicode")]
    InvalidEnvironment {
        /// The name of the variable.
        name: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error was caused by the input path string itself
    /// rather than by configuration or the surrounding system.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::Error;
    ///
    /// assert!(Error::InteractiveInput.is_input_error());
    /// assert!(Error::InputTooLarge { limit: 4 }.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InputTooLarge { .. }
                | Self::InteractiveInput
                | Self::InvalidInput { .. }
                | Self::InvalidEnvironment { .. }
        )
    }

    /// Check if the error came from loading or validating configuration.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidPath { .. } | Self::Validation { .. })
    }
}
