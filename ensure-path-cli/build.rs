//! Build script for ensure-path-cli.
//!
//! Generates the `ensure-path.1` man page into OUT_DIR with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! is described again here with clap's builder API.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/ensure.rs.
fn build_cli() -> Command {
    Command::new("ensure-path")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ensure an entry appears exactly once in a search path")
        .long_about(
            "Ensure an entry appears exactly once in a colon-delimited search path such as PATH, \
             optionally forcing it first and removing unwanted segments. \
             The resulting path is printed to standard output.",
        )
        .arg(
            Arg::new("entry")
                .value_name("ENTRY")
                .help("Entry that must appear exactly once in the path"),
        )
        .arg(
            Arg::new("any-position")
                .short('a')
                .long("any-position")
                .help("Only verify that the entry is present, not necessarily first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("first")
                .short('f')
                .long("first")
                .help("Force the entry first even if configuration says otherwise")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdin")
                .long("stdin")
                .help("Read the path from standard input instead of an environment variable")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("remove-empty")
                .short('e')
                .long("remove-empty")
                .help("Remove empty and whitespace-only segments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("keep-empty")
                .long("keep-empty")
                .help("Keep empty segments even if configuration removes them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("delete-matching")
                .short('d')
                .long("delete-matching")
                .value_name("SUBSTRING")
                .help("Delete segments containing SUBSTRING (the entry itself is kept)"),
        )
        .arg(
            Arg::new("no-delete-matching")
                .long("no-delete-matching")
                .help("Delete nothing even if configuration names a substring")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("variable")
                .long("variable")
                .value_name("NAME")
                .help("Environment variable to read the path from [default: PATH]"),
        )
        .arg(
            Arg::new("max-input-bytes")
                .long("max-input-bytes")
                .value_name("BYTES")
                .help("Maximum number of bytes accepted on standard input [default: 10240]"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Read defaults from this configuration file")
                .env("ENSURE_PATH_CONFIG"),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore configuration files (ENSURE_PATH_* variables still apply)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit"),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("ensure-path.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
