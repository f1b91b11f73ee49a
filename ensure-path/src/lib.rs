#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # ensure-path
//!
//! A library for normalizing colon-delimited search paths such as `PATH`.
//!
//! The core operation ensures that one entry appears exactly once in a path
//! string, optionally at the front, while optionally stripping blank segments
//! and segments containing a substring. It is a pure function over strings.
//!
//! ## Core Types
//!
//! - [`normalize`], [`Normalizer`] and [`NormalizeOptions`]: the transformation
//! - [`PathSource`]: where the input path string comes from
//! - [`Config`] and [`ConfigBuilder`]: persistent defaults for the CLI
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use ensure_path::{normalize, NormalizeOptions};
//!
//! // Force an entry to the front
//! let options = NormalizeOptions::new("/home/me/bin");
//! assert_eq!(
//!     normalize("/usr/bin:/home/me/bin:/bin", &options),
//!     "/home/me/bin:/usr/bin:/bin"
//! );
//!
//! // Only make sure it is there, and drop blank segments
//! let options = NormalizeOptions::new("/home/me/bin")
//!     .with_ensure_first(false)
//!     .with_remove_empty(true);
//! assert_eq!(normalize("/usr/bin::/bin", &options), "/home/me/bin:/usr/bin:/bin");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod source;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use normalize::{
    normalize, EntryPlacement, NormalizeOptions, Normalized, Normalizer, DELIMITER,
};
pub use source::{InputStream, PathSource, DEFAULT_MAX_INPUT_BYTES, DEFAULT_VARIABLE};
