//! `docshell check` command implementation.

use clap::Args;
use docshell_site::StaticSiteBuilder;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loads and validates configuration, builds the route registry and
    /// reports every page whose source file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or registry validation fails, or if
    /// any page source is missing.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.config.load(None)?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let builder = StaticSiteBuilder::from_config(&config)?;
        let registry = builder.site().registry();
        output.info(&format!(
            "{} page(s) in {} section(s)",
            registry.len(),
            registry.sections().len()
        ));

        let missing = builder.missing_sources();
        for source in &missing {
            tracing::warn!(slug = %source.slug, path = %source.path.display(), "Missing page source");
            output.warning(&format!(
                "Missing source for '{}': {}",
                source.slug,
                source.path.display()
            ));
        }

        if !missing.is_empty() {
            return Err(CliError::Validation(format!(
                "{} page source(s) missing",
                missing.len()
            )));
        }

        output.success("All page sources found");
        Ok(())
    }
}
