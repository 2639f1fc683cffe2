//! `docshell nav` command implementation.

use std::io::{self, Write};

use clap::Args;
use docshell_site::{DocsSite, PageNavigation};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Page path to resolve (e.g., /guides/intro).
    path: String,

    /// Print navigation data as JSON to stdout.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or registry validation fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.config.load(None)?;
        let site = DocsSite::from_config(&config)?;
        let nav = site.page_navigation(&site.shell(&self.path));

        if self.json {
            let json = serde_json::to_string_pretty(&nav)?;
            writeln!(io::stdout(), "{json}")?;
        } else {
            print_navigation(&Output::new(), &nav);
        }
        Ok(())
    }
}

/// Print navigation data as a readable summary.
fn print_navigation(output: &Output, nav: &PageNavigation) {
    let state = &nav.navigation;
    match state.current_index {
        Some(index) => output.highlight(&format!("/{} (page {})", state.current_slug, index + 1)),
        None => output.warning(&format!("/{} is not a registered page", state.current_slug)),
    }

    let previous = nav
        .pagination
        .previous
        .as_ref()
        .map_or("-", |link| link.href.as_str());
    let next = nav
        .pagination
        .next
        .as_ref()
        .map_or("-", |link| link.href.as_str());
    output.info(&format!("Previous: {previous}"));
    output.info(&format!("Next: {next}"));
    if let Some(url) = &nav.edit_url {
        output.info(&format!("Edit: {url}"));
    }

    for group in &nav.sidebar {
        output.info("");
        output.info(&group.label);
        for item in &group.items {
            let line = format!("  {} {}", item.title, item.href);
            if item.active {
                output.success(&format!("{line} (current)"));
            } else {
                output.muted(&line);
            }
        }
    }
}
