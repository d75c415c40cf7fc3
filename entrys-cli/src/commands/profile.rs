//! Command to show profile resolution.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the active profile and the document lookups resolve against.
#[derive(Args)]
pub struct ProfileCommand {}

impl ProfileCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = global.settings()?;
        let profile = settings.active_profile()?;
        let document = settings.document_path()?;

        println!("profile: {}", profile.as_deref().unwrap_or("(none)"));
        println!("document: {}", document.display());
        Ok(())
    }
}
