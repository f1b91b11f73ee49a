//! Library exports for ensure-path-cli.
//!
//! This module exports the CLI structure so integration tests and the build
//! script can inspect it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for build script
pub use cli::Cli;
