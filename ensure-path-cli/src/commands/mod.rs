//! CLI command implementations.
//!
//! - `ensure`: read a path, normalize it, print it (the default mode)
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod ensure;

pub use completions::CompletionsCommand;
pub use ensure::EnsureCommand;
