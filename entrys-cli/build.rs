//! Build script for entrys-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("entrys")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve configuration values from YAML and JSON documents")
        .long_about(
            "Command-line tool for resolving dotted keys from YAML and JSON documents, \
             with environment placeholders and profile documents",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Base document to resolve keys from")
                .value_name("PATH")
                .global(true)
                .env("ENTRYS_CONFIG"),
        )
        .arg(
            Arg::new("no-profile")
                .long("no-profile")
                .help("Ignore the profile declared in the base document")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("profile-key")
                .long("profile-key")
                .help("Key holding the profile name")
                .value_name("KEY")
                .global(true)
                .env("ENTRYS_PROFILE_KEY"),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Resolve a key and print its value")
                .long_about("Resolve a dotted key, substituting environment placeholders"),
            Command::new("list")
                .about("Resolve a key and print each sequence item on its own line")
                .long_about("Resolve a sequence key and print its items one per line"),
            Command::new("show")
                .about("Print the raw subtree at a key as JSON")
                .long_about("Print the document subtree at a key as JSON, without interpolation"),
            Command::new("profile")
                .about("Print the active profile and the document lookups resolve against")
                .long_about("Show which profile document keys are resolved from"),
            Command::new("check")
                .about("Check that every given key resolves")
                .long_about("Resolve each key and fail if any of them does not resolve"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("entrys.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
