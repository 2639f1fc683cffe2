//! `docshell build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docshell_site::StaticSiteBuilder;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, a page source is
    /// missing, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(self.output_dir)?;
        let builder = StaticSiteBuilder::from_config(&config)?;

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", builder.output_dir().display()));

        let report = builder.build()?;

        for warning in &report.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        output.success(&format!(
            "Built {} page(s) to {}",
            report.pages,
            report.output_dir.display()
        ));
        Ok(())
    }
}
