//! The main operation: read a path, normalize it, print it.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use ensure_path::{Config, NormalizeOptions, Normalizer, PathSource, DELIMITER};
use std::io::{self, Write};

/// Ensure an entry in a search path.
#[derive(Args, Debug)]
pub struct EnsureCommand {
    /// Entry that must appear exactly once in the path
    #[arg(value_name = "ENTRY", required_unless_present = "completions")]
    pub entry: Option<String>,

    /// Only verify that the entry is present, not necessarily first
    #[arg(short = 'a', long)]
    pub any_position: bool,

    /// Force the entry first even if configuration says otherwise
    #[arg(short = 'f', long, conflicts_with = "any_position")]
    pub first: bool,

    /// Read the path from standard input instead of an environment variable
    #[arg(long, conflicts_with = "variable")]
    pub stdin: bool,

    /// Remove empty and whitespace-only segments
    #[arg(short = 'e', long)]
    pub remove_empty: bool,

    /// Keep empty segments even if configuration removes them
    #[arg(long, conflicts_with = "remove_empty")]
    pub keep_empty: bool,

    /// Delete segments containing SUBSTRING (the entry itself is kept)
    #[arg(short = 'd', long, value_name = "SUBSTRING")]
    pub delete_matching: Option<String>,

    /// Delete nothing even if configuration names a substring
    #[arg(long, conflicts_with = "delete_matching")]
    pub no_delete_matching: bool,

    /// Environment variable to read the path from [default: PATH]
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// Maximum number of bytes accepted on standard input [default: 10240]
    #[arg(long, value_name = "BYTES")]
    pub max_input_bytes: Option<usize>,
}

impl EnsureCommand {
    /// Execute the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger;

        self.validate_arguments()?;
        let mut config = load_configuration(global, self.overrides())?;
        if self.no_delete_matching {
            config.delete_matching = None;
        }

        let entry = self
            .entry
            .ok_or_else(|| CliError::InvalidArguments("ENTRY is required".to_string()))?;
        if entry.contains(DELIMITER) {
            logger.warn(&format!(
                "entry '{entry}' contains '{DELIMITER}'; it is treated as a single segment"
            ));
        }

        let source = if self.stdin {
            PathSource::Stdin
        } else {
            PathSource::environment(config.variable())?
        };
        logger.info(&format!("Reading path from {source}"));

        let input = source.read(config.max_input_bytes())?;
        logger.debug(&format!(
            "Read {} byte(s), {} segment(s)",
            input.len(),
            input.split(DELIMITER).count()
        ));

        let options = NormalizeOptions::new(entry)
            .with_ensure_first(!config.any_position())
            .with_remove_empty(config.remove_empty())
            .with_remove_matching(config.delete_matching().map(str::to_string));
        logger.debug(&format!("Options: {options:?}"));

        let result = Normalizer::new(&options).run(&input);
        logger.info(&format!(
            "Entry {}; {} segment(s) removed{}",
            result.placement,
            result.removed,
            if result.changed(&input) { "" } else { "; path unchanged" }
        ));

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", result.output)?;
        Ok(())
    }

    /// Reject flag values that are never meaningful.
    fn validate_arguments(&self) -> Result<(), CliError> {
        if self.max_input_bytes == Some(0) {
            return Err(CliError::InvalidArguments(
                "--max-input-bytes must be greater than zero".to_string(),
            ));
        }
        if self.delete_matching.as_deref() == Some("") {
            return Err(CliError::InvalidArguments(
                "--delete-matching needs a non-empty substring".to_string(),
            ));
        }
        if self.variable.as_deref() == Some("") {
            return Err(CliError::InvalidArguments(
                "--variable needs a variable name".to_string(),
            ));
        }
        Ok(())
    }

    /// Flags as a configuration layer; unset flags leave lower layers alone.
    fn overrides(&self) -> Config {
        let any_position = if self.any_position {
            Some(true)
        } else if self.first {
            Some(false)
        } else {
            None
        };

        Config {
            variable: self.variable.clone(),
            any_position,
            remove_empty: if self.remove_empty {
                Some(true)
            } else if self.keep_empty {
                Some(false)
            } else {
                None
            },
            delete_matching: self.delete_matching.clone(),
            max_input_bytes: self.max_input_bytes,
        }
    }
}
