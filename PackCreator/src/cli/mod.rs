//! PackCreator CLI - Command-line interface for building FiveM resource packs

pub mod commands;
pub mod progress;

use clap::{ArgAction, Parser};
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "packcreator")]
#[command(version, about = "PackCreator: build FiveM resource packs from vehicle folders", long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Run the PackCreator CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()?;

    Ok(())
}
