//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `get`: Resolve a key and print its value
//! - `list`: Print the items of a sequence value one per line
//! - `show`: Print the raw subtree at a key as JSON or YAML
//! - `profile`: Show the active profile and document
//! - `check`: Check that keys resolve
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod get;
pub mod list;
pub mod profile;
pub mod show;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use list::ListCommand;
pub use profile::ProfileCommand;
pub use show::ShowCommand;
