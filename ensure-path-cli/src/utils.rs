//! Utility functions for CLI operations.

use crate::error::CliError;
use ensure_path::{Config, ConfigBuilder, Logger};
use std::path::PathBuf;

/// Global CLI options shared by every mode.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Logger built from `--verbose`/`--quiet` and the environment.
    pub logger: Logger,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Ignore configuration files.
    pub no_config: bool,
}

/// Load layered configuration with the command-line flags on top.
///
/// Precedence, highest first:
/// 1. Command-line flags (`overrides`)
/// 2. `ENSURE_PATH_*` environment variables
/// 3. The configuration file (`--config` or `~/.ensure-path/config.yaml`)
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if global.no_config {
        builder = builder.skip_files();
    } else if let Some(path) = &global.config {
        global
            .logger
            .debug(&format!("Using configuration file {}", path.display()));
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(CliError::from)
}
