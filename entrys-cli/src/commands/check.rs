//! Command to check that keys resolve.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Check that every given key resolves.
///
/// Each failing key is reported on stderr; the command fails if any did.
#[derive(Args)]
pub struct CheckCommand {
    /// Dotted keys to check
    #[arg(required = true)]
    pub keys: Vec<String>,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = global.settings()?;

        let mut failed = 0;
        for key in &self.keys {
            match settings.entry(key).value() {
                Ok(_) => {
                    if !global.quiet {
                        println!("{key}: ok");
                    }
                }
                Err(e) => {
                    failed += 1;
                    eprintln!("{key}: {e}");
                }
            }
        }

        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} keys failed to resolve",
                self.keys.len()
            )));
        }
        Ok(())
    }
}
