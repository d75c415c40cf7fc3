//! Command to resolve a single key.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Resolve a key and print its value.
#[derive(Args)]
pub struct GetCommand {
    /// Dotted key to resolve (e.g. `database.host`)
    pub key: String,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = global.settings()?;
        let value = settings.entry(&self.key).value()?;

        if global.verbose {
            log::info!(
                "resolved '{}' from {}",
                self.key,
                settings.document_path()?.display()
            );
        }

        println!("{value}");
        Ok(())
    }
}
