//! Main entry point for the ensure-path CLI.
//!
//! Prints the given search path (by default `$PATH`) with the entry present
//! exactly once, optionally first and with unwanted segments removed.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::CompletionsCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors exit here with status 2
    let cli = Cli::parse();

    let global = GlobalOptions {
        logger: ensure_path::init_logger(cli.verbose, cli.quiet),
        config: cli.config,
        no_config: cli.no_config,
    };

    let result = match cli.completions {
        Some(shell) => CompletionsCommand { shell }.execute(&global),
        None => cli.ensure.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
