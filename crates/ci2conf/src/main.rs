//! ci2conf CLI - Build-to-wiki publisher.
//!
//! Two commands: `publish` attaches build artifacts to a Confluence page
//! and applies the configured markup edits; `check` verifies that the
//! configured site, space and page exist before a pipeline relies on them.

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, PublishArgs};
use output::Output;

/// ci2conf - Publish build artifacts to Confluence.
#[derive(Parser)]
#[command(name = "ci2conf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish build artifacts and markup edits to the configured page.
    Publish(PublishArgs),
    /// Verify the configured site, space and page are reachable.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Publish(args) if args.verbose);

    // --verbose wins over RUST_LOG; without either, stay at info
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Publish(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
