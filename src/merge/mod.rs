//! Merge engine
//!
//! Combines an ordered list of resource packs into one archive with
//! override-by-priority semantics: every path present in any input ends up
//! in the output, and conflicting paths take their content from the pack
//! highest in the list.

mod archive;
mod engine;
mod progress;

pub use engine::{
    DEFAULT_OUTPUT_NAME, ICON_ENTRY, MCMETA_ENTRY, MergeRequest, MergedArchive, PACK_DESCRIPTION,
    PACK_FORMAT, PackMcmeta, PackSection, merge, merge_with_progress, resolve_output_name,
};
pub use progress::{CancelToken, MergePhase, MergeProgress, MergeProgressCallback};
