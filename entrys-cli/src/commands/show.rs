//! Command to print the raw subtree at a key.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use entrys::{DocumentNode, KeyPath, KeyResolver};

/// Print the subtree at a key, without interpolation.
#[derive(Args)]
pub struct ShowCommand {
    /// Dotted key of the subtree; the whole document when omitted
    pub key: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let root = global.settings()?.load_document()?;

        let node = match &self.key {
            Some(key) => {
                let path = KeyPath::parse(key)?;
                KeyResolver::node(&root, &path)?.ok_or_else(|| {
                    CliError::SemanticFailure(format!("attribute for key '{key}' is null"))
                })?
            }
            None => &root,
        };

        print!("{}", render(node, self.format)?);
        Ok(())
    }
}

fn render(node: &DocumentNode, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(node)
            .map(|json| json + "\n")
            .map_err(|e| CliError::Config(format!("Failed to serialize document: {e}"))),
        OutputFormat::Yaml => serde_yaml::to_string(node)
            .map_err(|e| CliError::Config(format!("Failed to serialize document: {e}"))),
    }
}
