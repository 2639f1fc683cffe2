//! docshell CLI - Docs shell static site generator.
//!
//! Provides commands for:
//! - `build`: Render every registered page into a static site
//! - `check`: Validate configuration, route registry and page sources
//! - `nav`: Show navigation state for a path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, NavArgs};
use output::Output;

/// docshell - Docs shell static site generator.
#[derive(Parser)]
#[command(name = "docshell", version, about)]
struct Cli {
    /// Enable verbose output (build progress and warnings).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
    /// Check configuration and page sources without writing anything.
    Check(CheckArgs),
    /// Show sidebar, pagination and edit link for a path.
    Nav(NavArgs),
}

/// `--verbose` enables INFO, otherwise `RUST_LOG` applies, defaulting to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
