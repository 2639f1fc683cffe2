//! CLI command implementations.

mod build;
mod check;
mod nav;

use std::path::PathBuf;

use clap::Args;
use docshell_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

/// Configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docshell.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Branch used in edit links (overrides config).
    #[arg(long, env = "DOCSHELL_EDIT_BRANCH")]
    edit_branch: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with these arguments and an optional output override.
    pub(crate) fn load(self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir,
            edit_branch: self.edit_branch,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
