//! MineMerge command-line binary

fn main() -> anyhow::Result<()> {
    minemerge::cli::run_cli()
}
