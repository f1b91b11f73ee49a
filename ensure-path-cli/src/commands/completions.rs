//! Shell completion generation.
//!
//! `ensure-path --completions <SHELL>` writes a completion script for bash,
//! zsh, fish, PowerShell or elvish to stdout, with setup hints on stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary (the package is `ensure-path-cli`).
const BIN_NAME: &str = "ensure-path";

/// Generate shell completion scripts
pub struct CompletionsCommand {
    /// Shell to generate completions for
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !matches!(global.logger.level(), ensure_path::LogLevel::Quiet) {
            Self::print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }

    fn print_instructions(shell: Shell) {
        eprintln!("# Generating {shell} completion script");
        eprintln!("# Run the following command to enable completions:");

        match shell {
            Shell::Bash => {
                eprintln!(
                    "#   ensure-path --completions bash > ~/.local/share/bash-completion/completions/ensure-path"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(ensure-path --completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   ensure-path --completions zsh > ~/.zsh/completions/_ensure-path");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                eprintln!(
                    "#   ensure-path --completions fish > ~/.config/fish/completions/ensure-path.fish"
                );
            }
            Shell::PowerShell => {
                eprintln!("#   ensure-path --completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        eprintln!();
    }
}
