//! # MineMerge
//!
//! Merge several Minecraft resource packs into a single archive, with list
//! position deciding which pack wins when the same file path appears in
//! more than one input — the same layering semantics the game itself uses.
//!
//! ## How merging works
//!
//! Packs live in a priority-ordered [`pack::PackList`] (index 0 wins). The
//! [`merge`] engine processes them in ascending priority order into an
//! explicit path → content map, so higher-priority packs physically
//! overwrite lower-priority entries, then writes the combined map out as a
//! deflated ZIP together with a fixed `pack.mcmeta` and a `pack.png` icon.
//!
//! ## Quick Start
//!
//! ```no_run
//! use minemerge::merge::{self, MergeRequest};
//! use minemerge::pack::PackList;
//!
//! let mut list = PackList::new();
//! list.add_file("ocean_sounds.zip")?;
//! list.add_file("faithful_textures.zip")?; // added last, highest priority
//!
//! let merged = merge::merge(&MergeRequest::new(list.snapshot()))?;
//! std::fs::write(&merged.name, &merged.bytes)?;
//! # Ok::<(), minemerge::Error>(())
//! ```
//!
//! ### Progress and cancellation
//!
//! ```no_run
//! use minemerge::merge::{self, CancelToken, MergeRequest};
//! use minemerge::pack::PackList;
//!
//! let mut list = PackList::new();
//! list.add_file("pack.zip")?;
//!
//! let token = CancelToken::new();
//! let merged = merge::merge_with_progress(
//!     &MergeRequest::new(list.snapshot()).with_output_name("Combined"),
//!     &token,
//!     &|p| println!("{}: {}/{}", p.phase.as_str(), p.current, p.total),
//! )?;
//! assert_eq!(merged.name, "Combined.zip");
//! # Ok::<(), minemerge::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `minemerge` command-line binary

pub mod error;
pub mod icon;
pub mod merge;
pub mod pack;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::icon::{DefaultIcon, IconProvider, SuppliedIcon};
    pub use crate::merge::{
        CancelToken, MergePhase, MergeProgress, MergeRequest, MergedArchive, PackMcmeta, merge,
        merge_with_progress, resolve_output_name,
    };
    pub use crate::pack::{ListChange, Pack, PackId, PackList, is_resource_pack_name};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
