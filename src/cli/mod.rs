//! MineMerge CLI - Command-line interface for merging resource packs

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "minemerge")]
#[command(version = crate::VERSION)]
#[command(about = "MineMerge: combine Minecraft resource packs with priority overrides", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the MineMerge CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
