//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and
//! turns them into library settings.

use crate::error::CliError;
use entrys::{Settings, SettingsBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Base document to resolve keys from.
    pub file: Option<PathBuf>,

    /// Ignore profile declarations.
    pub no_profile: bool,

    /// Key holding the profile declaration.
    pub profile_key: Option<String>,
}

impl GlobalOptions {
    /// Build library settings.
    ///
    /// Precedence, highest first:
    /// 1. Global options
    /// 2. `ENTRYS_*` environment variables
    /// 3. Built-in defaults
    pub fn settings(&self) -> Result<Settings, CliError> {
        let mut builder = SettingsBuilder::new();
        if let Some(file) = &self.file {
            builder = builder.with_path(file);
        }
        if let Some(key) = &self.profile_key {
            builder = builder.with_profile_key(key);
        }
        if self.no_profile {
            builder = builder.without_profiles();
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}
