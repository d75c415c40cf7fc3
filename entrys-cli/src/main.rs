//! Main entry point for the entrys CLI.
//!
//! This is the command-line interface for inspecting configuration values:
//! - `get`: Resolve a key and print its value
//! - `list`: Print the items of a sequence value
//! - `show`: Print the raw subtree at a key
//! - `profile`: Show the active profile and document
//! - `check`: Check that keys resolve

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library log events to stderr
    if let Err(e) = entrys::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        file: cli.file,
        no_profile: cli.no_profile,
        profile_key: cli.profile_key,
    };

    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Profile(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.causes() {
                eprintln!("  caused by: {cause}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
