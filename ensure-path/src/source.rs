//! Acquisition of the input path string.
//!
//! The normalizer works on plain strings. This module fetches that string
//! either from an environment variable or from standard input, enforcing a
//! size limit on the latter and refusing to block on an interactive terminal.

use std::env;
use std::fmt;
use std::io::{self, IsTerminal, Read};

use crate::error::{Error, Result};

/// Environment variable read when no other source is configured.
pub const DEFAULT_VARIABLE: &str = "PATH";

/// Default cap on bytes read from standard input (10 KiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024;

/// Where the input path string comes from.
///
/// # Examples
///
/// ```
/// use ensure_path::PathSource;
///
/// let source = PathSource::default();
/// assert_eq!(source, PathSource::Environment("PATH".to_string()));
/// assert_eq!(source.to_string(), "environment variable PATH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    /// The value of the named environment variable.
    Environment(String),
    /// The full contents of standard input.
    Stdin,
}

impl Default for PathSource {
    fn default() -> Self {
        Self::Environment(DEFAULT_VARIABLE.to_string())
    }
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(name) => write!(f, "environment variable {name}"),
            Self::Stdin => write!(f, "standard input"),
        }
    }
}

impl PathSource {
    /// Builds an environment source, checking that `name` can be a variable
    /// name at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is empty or contains `=` or
    /// NUL.
    ///
    /// # Examples
    ///
    /// ```
    /// use ensure_path::PathSource;
    ///
    /// assert!(PathSource::environment("MANPATH").is_ok());
    /// assert!(PathSource::environment("A=B").is_err());
    /// ```
    pub fn environment(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let problem = if name.is_empty() {
            Some("must not be empty")
        } else if name.contains(['=', '\0']) {
            Some("must not contain '=' or NUL characters")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: "variable".to_string(),
                message: message.to_string(),
            }),
            None => Ok(Self::Environment(name)),
        }
    }

    /// Reads the path string from this source.
    ///
    /// `max_input_bytes` only applies to [`PathSource::Stdin`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The environment variable holds non-Unicode data
    /// - Standard input is an interactive terminal
    /// - Standard input exceeds `max_input_bytes` or is not UTF-8
    /// - Reading standard input fails
    pub fn read(&self, max_input_bytes: usize) -> Result<String> {
        match self {
            Self::Environment(name) => read_environment(name),
            Self::Stdin => read_stdin(max_input_bytes),
        }
    }
}

/// Reads an environment variable, treating an unset variable as empty.
///
/// # Errors
///
/// Returns [`Error::InvalidEnvironment`] if the value is not valid Unicode.
pub fn read_environment(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => {
            log::debug!("{name} is not set; treating it as empty");
            Ok(String::new())
        }
        Err(env::VarError::NotUnicode(_)) => Err(Error::InvalidEnvironment {
            name: name.to_string(),
        }),
    }
}

/// A readable stream that can tell whether it is attached to a terminal.
pub trait InputStream: Read {
    /// Returns true if reading would wait on a person typing.
    fn is_interactive(&self) -> bool;
}

impl InputStream for io::Stdin {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

/// Reads all of standard input, refusing interactive terminals.
///
/// # Errors
///
/// See [`read_input`].
pub fn read_stdin(max_input_bytes: usize) -> Result<String> {
    read_input(io::stdin(), max_input_bytes)
}

/// Reads a whole stream and strips one trailing line terminator.
///
/// # Errors
///
/// Returns [`Error::InteractiveInput`] when the stream is a terminal, and
/// any error from [`read_bounded`].
pub fn read_input<S: InputStream>(stream: S, max_input_bytes: usize) -> Result<String> {
    if stream.is_interactive() {
        return Err(Error::InteractiveInput);
    }

    let contents = read_bounded(stream, max_input_bytes)?;
    Ok(strip_line_terminator(contents))
}

/// Reads `reader` to the end, failing if it yields more than `limit` bytes.
///
/// Exactly `limit` bytes are accepted.
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] if the input exceeds `limit`,
/// [`Error::InvalidInput`] if it is not UTF-8, or [`Error::Io`] on read
/// failure.
///
/// # Examples
///
/// ```
/// use ensure_path::source::read_bounded;
///
/// let input = read_bounded("/usr/bin:/bin".as_bytes(), 64).unwrap();
/// assert_eq!(input, "/usr/bin:/bin");
///
/// assert!(read_bounded("/usr/bin:/bin".as_bytes(), 4).is_err());
/// ```
pub fn read_bounded<R: Read>(reader: R, limit: usize) -> Result<String> {
    let mut buffer = Vec::with_capacity(limit.min(4 * 1024));
    // One byte past the limit is enough to tell "at the limit" from "over it".
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(cap).read_to_end(&mut buffer)?;

    if buffer.len() > limit {
        return Err(Error::InputTooLarge { limit });
    }
    log::debug!("read {} bytes of input", buffer.len());

    String::from_utf8(buffer).map_err(|e| Error::InvalidInput {
        reason: format!("input is not valid UTF-8: {e}"),
    })
}

/// Strips one trailing `\n` or `\r\n`, as left behind by `echo`.
fn strip_line_terminator(mut contents: String) -> String {
    if contents.ends_with('\n') {
        contents.pop();
        if contents.ends_with('\r') {
            contents.pop();
        }
    }
    contents
}
