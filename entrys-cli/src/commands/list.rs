//! Command to print the items of a sequence value.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use entrys::operation::Split;
use entrys::{Constant, Entry};

/// Resolve a key and print each `;`-separated item on its own line.
#[derive(Args)]
pub struct ListCommand {
    /// Dotted key to resolve
    pub key: String,
}

impl ListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let value = global.settings()?.entry(&self.key).value()?;

        // An empty sequence has no items
        if value.is_empty() {
            return Ok(());
        }

        for item in Split::semicolon(Constant::new(value)).value()? {
            println!("{item}");
        }
        Ok(())
    }
}
