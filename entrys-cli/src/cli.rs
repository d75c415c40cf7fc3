//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, GetCommand, ListCommand, ProfileCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving configuration values.
#[derive(Parser)]
#[command(name = "entrys")]
#[command(
    version,
    about = "Resolve configuration values from YAML and JSON documents",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Base document to resolve keys from
    #[arg(
        long,
        short = 'f',
        value_name = "PATH",
        global = true,
        env = "ENTRYS_CONFIG"
    )]
    pub file: Option<PathBuf>,

    /// Ignore the profile declared in the base document
    #[arg(long, global = true)]
    pub no_profile: bool,

    /// Key holding the profile name
    #[arg(long, value_name = "KEY", global = true, env = "ENTRYS_PROFILE_KEY")]
    pub profile_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a key and print its value
    Get(GetCommand),

    /// Resolve a key and print each sequence item on its own line
    List(ListCommand),

    /// Print the raw subtree at a key as JSON
    Show(ShowCommand),

    /// Print the active profile and the document lookups resolve against
    Profile(ProfileCommand),

    /// Check that every given key resolves
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
