//! CLI structure and argument definitions.
//!
//! This module defines the command line using clap's derive macros. There
//! are no subcommands: the tool does one thing, and `--completions` is the
//! only alternative mode.

use crate::commands::EnsureCommand;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Ensure an entry appears exactly once in a colon-delimited search path.
#[derive(Parser)]
#[command(name = "ensure-path")]
#[command(
    version,
    about = "Ensure an entry appears exactly once in a search path",
    long_about = "Ensure an entry appears exactly once in a colon-delimited search path \
                  such as PATH, optionally forcing it first and removing unwanted segments. \
                  The resulting path is printed to standard output."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Read defaults from this configuration file
    #[arg(long, value_name = "FILE", env = "ENSURE_PATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Ignore configuration files (ENSURE_PATH_* variables still apply)
    #[arg(long)]
    pub no_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    #[command(flatten)]
    pub ensure: EnsureCommand,
}
