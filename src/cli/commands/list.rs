use std::path::PathBuf;

use console::style;

use crate::pack::PackList;

pub fn execute(packs: &[PathBuf]) -> anyhow::Result<()> {
    // Arguments are highest-priority first; add in reverse so the first
    // argument sits at the top of the list.
    let mut list = PackList::new();
    for path in packs.iter().rev() {
        list.add_file(path)?;
    }

    println!("{}", style("Pack list (top wins conflicts):").bold());
    for (index, pack) in list.packs().iter().enumerate() {
        let up = if list.can_move_up(pack.id()) { "↑" } else { " " };
        let down = if list.can_move_down(pack.id()) { "↓" } else { " " };
        println!(
            "  {:>2}. {up}{down} {} ({})",
            index + 1,
            pack.name(),
            pack.display_size()
        );
    }
    Ok(())
}
