//! Subcommand definitions and execution for the CLI

use clap::Subcommand;
use std::path::PathBuf;

pub mod list;
pub mod merge;

#[derive(Subcommand)]
pub enum Commands {
    /// Merge resource packs into one archive (first pack wins conflicts)
    Merge {
        /// Input pack archives, highest priority first
        #[arg(required = true)]
        packs: Vec<PathBuf>,

        /// Output pack name (".zip" appended if missing)
        #[arg(short, long)]
        output: Option<String>,

        /// PNG file to use as the pack icon
        #[arg(long)]
        icon: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the pack list as it would be merged
    List {
        /// Input pack archives, highest priority first
        #[arg(required = true)]
        packs: Vec<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Merge {
                packs,
                output,
                icon,
                quiet,
            } => merge::execute(packs, output.as_deref(), icon.as_deref(), *quiet),
            Commands::List { packs } => list::execute(packs),
        }
    }
}
