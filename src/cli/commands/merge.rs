use std::path::{Path, PathBuf};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::merge::{self, CancelToken, MergePhase, MergeRequest};
use crate::pack::{PackList, is_resource_pack_name};

pub fn execute(
    packs: &[PathBuf],
    output: Option<&str>,
    icon: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let accepted = filter_pack_paths(packs);
    if accepted.is_empty() {
        anyhow::bail!("no .zip resource packs among the inputs");
    }

    // Arguments are highest-priority first; the list inserts at the top,
    // so add in reverse to land the first argument at index 0.
    let mut list = PackList::new();
    for path in accepted.iter().rev() {
        list.add_file(path)?;
    }

    let mut request = MergeRequest::new(list.snapshot());
    if let Some(name) = output {
        request = request.with_output_name(name);
    }
    if let Some(icon_path) = icon {
        request = request.with_icon(std::fs::read(icon_path)?);
    }

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(list.len() as u64);
        if let Ok(template) = ProgressStyle::with_template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(template);
        }
        bar
    };

    let merged = merge::merge_with_progress(&request, &CancelToken::new(), &|p| {
        bar.set_position(p.current as u64);
        match p.phase {
            MergePhase::ReadingPacks => {
                if let Some(pack) = &p.current_pack {
                    bar.set_message(format!("merging {pack}"));
                }
            }
            MergePhase::Complete => bar.set_message("done"),
            phase => bar.set_message(phase.as_str()),
        }
    })?;
    bar.finish_and_clear();

    std::fs::write(&merged.name, &merged.bytes)?;

    let size_mb = merged.bytes.len() as f64 / 1024.0 / 1024.0;
    println!(
        "{} {} ({} packs, {size_mb:.2} MB)",
        style("Created").green().bold(),
        merged.name,
        list.len()
    );
    Ok(())
}

/// Keep only `.zip` inputs, reporting each rejected file by name.
fn filter_pack_paths(paths: &[PathBuf]) -> Vec<&Path> {
    let mut accepted = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        if is_resource_pack_name(&name) {
            accepted.push(path.as_path());
        } else {
            eprintln!("Skipping {}: not a .zip resource pack", path.display());
        }
    }
    accepted
}
