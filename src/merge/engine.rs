//! Priority-based merge of resource packs
//!
//! Packs are processed in ascending priority order and copied into an
//! explicit path → content map, so a later (higher-priority) pack
//! overwrites any same-path entry from an earlier one. The override
//! contract lives in the map, not in an archive writer's overwrite
//! behavior.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::icon::{DefaultIcon, IconProvider, SuppliedIcon};
use crate::pack::Pack;

use super::archive;
use super::progress::{CancelToken, MergePhase, MergeProgress, MergeProgressCallback};

/// Resource pack format version written to the merged pack.mcmeta.
pub const PACK_FORMAT: u32 = 15;

/// Description written to the merged pack.mcmeta.
pub const PACK_DESCRIPTION: &str = "Merged with MineMerge";

/// Output name used when the caller supplies none.
pub const DEFAULT_OUTPUT_NAME: &str = "MineMerge_Pack";

/// Archive path of the pack metadata entry.
pub const MCMETA_ENTRY: &str = "pack.mcmeta";

/// Archive path of the pack icon entry.
pub const ICON_ENTRY: &str = "pack.png";

const OUTPUT_EXTENSION: &str = ".zip";

/// The `pack.mcmeta` document of a resource pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMcmeta {
    /// The `pack` section.
    pub pack: PackSection,
}

/// The `pack` section of a `pack.mcmeta` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSection {
    /// Resource pack format version.
    pub pack_format: u32,
    /// Pack description shown in the game's pack screen.
    pub description: String,
}

impl PackMcmeta {
    /// The fixed metadata written to every merged pack, overriding any
    /// metadata contributed by input packs.
    #[must_use]
    pub fn merged() -> Self {
        Self {
            pack: PackSection {
                pack_format: PACK_FORMAT,
                description: PACK_DESCRIPTION.to_string(),
            },
        }
    }

    /// Serialize with 4-space indentation (cosmetic, matches the game's
    /// own formatting).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}

/// Everything the merge engine needs for one merge: an ordered snapshot of
/// the pack list (priority-descending, index 0 wins), optional icon bytes,
/// and the desired output name.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Packs in priority order, index 0 = highest priority.
    pub packs: Vec<Pack>,
    /// PNG bytes for the pack icon, written verbatim when present.
    pub icon: Option<Vec<u8>>,
    /// Desired output name; defaulted and suffixed during the merge.
    pub output_name: Option<String>,
}

impl MergeRequest {
    /// Create a request with default icon and output name.
    #[must_use]
    pub fn new(packs: Vec<Pack>) -> Self {
        Self {
            packs,
            icon: None,
            output_name: None,
        }
    }

    /// Use the given PNG bytes as the pack icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Vec<u8>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Use the given output name (extension appended if missing).
    #[must_use]
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }
}

/// The merged archive: final download name plus the serialized ZIP bytes.
#[derive(Debug, Clone)]
pub struct MergedArchive {
    /// Resolved output file name (always ends in `.zip`).
    pub name: String,
    /// Serialized archive bytes.
    pub bytes: Vec<u8>,
}

/// Resolve the output file name: trim, fall back to the default when
/// empty, and append the `.zip` suffix unless already present
/// (case-sensitive, so `Pack.ZIP` becomes `Pack.ZIP.zip`).
pub fn resolve_output_name(input: Option<&str>) -> Result<String> {
    let trimmed = input.map(str::trim).unwrap_or_default();
    let mut name = if trimmed.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        trimmed.to_string()
    };

    if name.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidOutputName(name));
    }

    if !name.ends_with(OUTPUT_EXTENSION) {
        name.push_str(OUTPUT_EXTENSION);
    }
    Ok(name)
}

/// Merge the request's packs into a single archive.
///
/// Convenience wrapper around [`merge_with_progress`] with no cancellation
/// and no progress reporting.
pub fn merge(request: &MergeRequest) -> Result<MergedArchive> {
    merge_with_progress(request, &CancelToken::new(), &|_| {})
}

/// Merge the request's packs into a single archive, reporting progress and
/// honoring cancellation between processing steps.
///
/// Fails before any work when the pack list is empty or the output name is
/// invalid. Fails without partial output when any input archive cannot be
/// opened, naming the offending pack.
pub fn merge_with_progress(
    request: &MergeRequest,
    cancel: &CancelToken,
    progress: MergeProgressCallback,
) -> Result<MergedArchive> {
    if request.packs.is_empty() {
        return Err(Error::EmptyPackList);
    }
    let name = resolve_output_name(request.output_name.as_deref())?;

    let total = request.packs.len();
    tracing::info!("merging {total} packs into '{name}'");

    // Ascending priority: the highest-priority pack (index 0) is copied
    // last and overwrites everything underneath it.
    let mut contents: IndexMap<String, Vec<u8>> = IndexMap::new();
    for (step, pack) in request.packs.iter().rev().enumerate() {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        progress(&MergeProgress::with_pack(
            MergePhase::ReadingPacks,
            step + 1,
            total,
            pack.name(),
        ));

        let entries = archive::read_pack_entries(pack.name(), pack.bytes())?;
        tracing::debug!("pack '{}': {} entries", pack.name(), entries.len());
        for (path, data) in entries {
            contents.insert(path, data);
        }
    }

    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    progress(&MergeProgress::new(MergePhase::WritingMetadata, total, total));

    // The merged pack's own identity always wins: icon and metadata are
    // written over anything the input packs contributed.
    let icon = match request.icon.as_ref() {
        Some(bytes) => SuppliedIcon::new(bytes.clone()).icon_png()?,
        None => DefaultIcon.icon_png()?,
    };
    contents.insert(ICON_ENTRY.to_string(), icon);
    contents.insert(MCMETA_ENTRY.to_string(), PackMcmeta::merged().to_bytes()?);

    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    progress(&MergeProgress::new(MergePhase::Serializing, total, total));

    let bytes = archive::write_archive(&contents)?;
    progress(&MergeProgress::new(MergePhase::Complete, total, total));
    tracing::info!("merged archive '{name}' is {} bytes", bytes.len());

    Ok(MergedArchive { name, bytes })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::merge::archive::build_zip;
    use crate::pack::PackList;

    use super::*;

    fn read_entry(archive_bytes: &[u8], path: &str) -> Vec<u8> {
        let entries = archive::read_pack_entries("merged.zip", archive_bytes).unwrap();
        entries
            .into_iter()
            .find(|(p, _)| p == path)
            .map(|(_, data)| data)
            .unwrap_or_else(|| panic!("entry '{path}' missing from merged archive"))
    }

    #[test]
    fn test_higher_list_position_wins() {
        // A at index 0 overrides B for x.json; y.json comes from B alone.
        let mut list = PackList::new();
        list.add_bytes("b.zip", build_zip(&[("x.json", b"2"), ("y.json", b"3")]));
        list.add_bytes("a.zip", build_zip(&[("x.json", b"1")]));

        let merged = merge(&MergeRequest::new(list.snapshot())).unwrap();
        assert_eq!(read_entry(&merged.bytes, "x.json"), b"1");
        assert_eq!(read_entry(&merged.bytes, "y.json"), b"3");
    }

    #[test]
    fn test_union_of_all_paths() {
        let mut list = PackList::new();
        list.add_bytes("low.zip", build_zip(&[("only_low.txt", b"low")]));
        list.add_bytes("high.zip", build_zip(&[("only_high.txt", b"high")]));

        let merged = merge(&MergeRequest::new(list.snapshot())).unwrap();
        let paths: Vec<String> = archive::read_pack_entries("merged.zip", &merged.bytes)
            .unwrap()
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert!(paths.contains(&"only_low.txt".to_string()));
        assert!(paths.contains(&"only_high.txt".to_string()));
        assert!(paths.contains(&MCMETA_ENTRY.to_string()));
        assert!(paths.contains(&ICON_ENTRY.to_string()));
    }

    #[test]
    fn test_mcmeta_always_overwritten() {
        let mut list = PackList::new();
        list.add_bytes(
            "custom.zip",
            build_zip(&[(MCMETA_ENTRY, br#"{"pack":{"pack_format":9,"description":"mine"}}"#)]),
        );

        let merged = merge(&MergeRequest::new(list.snapshot())).unwrap();
        let mcmeta: PackMcmeta =
            serde_json::from_slice(&read_entry(&merged.bytes, MCMETA_ENTRY)).unwrap();
        assert_eq!(mcmeta, PackMcmeta::merged());
    }

    #[test]
    fn test_mcmeta_uses_four_space_indent() {
        let bytes = PackMcmeta::merged().to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n    \"pack\""));
        assert!(text.contains("\"pack_format\": 15"));
        assert!(text.contains("\"description\": \"Merged with MineMerge\""));
    }

    #[test]
    fn test_supplied_icon_written_verbatim() {
        let mut list = PackList::new();
        list.add_bytes("a.zip", build_zip(&[("x.json", b"1")]));
        let icon = vec![0x89, 0x50, 0x4E, 0x47, 1, 2, 3];

        let merged = merge(&MergeRequest::new(list.snapshot()).with_icon(icon.clone())).unwrap();
        assert_eq!(read_entry(&merged.bytes, ICON_ENTRY), icon);
    }

    #[test]
    fn test_default_icon_is_decodable_png() {
        let mut list = PackList::new();
        list.add_bytes("a.zip", build_zip(&[("x.json", b"1")]));

        let merged = merge(&MergeRequest::new(list.snapshot())).unwrap();
        let icon = read_entry(&merged.bytes, ICON_ENTRY);
        let decoded = image::load_from_memory(&icon).unwrap();
        assert_eq!(decoded.width(), crate::icon::ICON_SIZE);
        assert_eq!(decoded.height(), crate::icon::ICON_SIZE);
    }

    #[test]
    fn test_empty_list_rejected_before_work() {
        let err = merge(&MergeRequest::new(Vec::new())).unwrap_err();
        assert!(matches!(err, Error::EmptyPackList));
    }

    #[test]
    fn test_corrupt_pack_fails_with_name_and_no_output() {
        let mut list = PackList::new();
        list.add_bytes("good.zip", build_zip(&[("x.json", b"1")]));
        list.add_bytes("bad.zip", b"definitely not a zip".to_vec());

        let err = merge(&MergeRequest::new(list.snapshot())).unwrap_err();
        assert!(matches!(err, Error::OpenPack { ref name, .. } if name == "bad.zip"));
    }

    #[test]
    fn test_output_name_defaulting_and_suffix() {
        assert_eq!(resolve_output_name(None).unwrap(), "MineMerge_Pack.zip");
        assert_eq!(resolve_output_name(Some("  ")).unwrap(), "MineMerge_Pack.zip");
        assert_eq!(resolve_output_name(Some("MyPack")).unwrap(), "MyPack.zip");
        assert_eq!(resolve_output_name(Some("MyPack.zip")).unwrap(), "MyPack.zip");
        // Suffix check is case-sensitive, as in the game launcher.
        assert_eq!(resolve_output_name(Some("MyPack.ZIP")).unwrap(), "MyPack.ZIP.zip");
    }

    #[test]
    fn test_output_name_with_path_separator_rejected() {
        let err = resolve_output_name(Some("../escape")).unwrap_err();
        assert!(matches!(err, Error::InvalidOutputName(_)));
    }

    #[test]
    fn test_cancelled_before_first_pack() {
        let mut list = PackList::new();
        list.add_bytes("a.zip", build_zip(&[("x.json", b"1")]));

        let token = CancelToken::new();
        token.cancel();
        let err = merge_with_progress(&MergeRequest::new(list.snapshot()), &token, &|_| {})
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_progress_phases_in_order() {
        use std::sync::Mutex;

        let mut list = PackList::new();
        list.add_bytes("a.zip", build_zip(&[("x.json", b"1")]));
        list.add_bytes("b.zip", build_zip(&[("y.json", b"2")]));

        let phases = Mutex::new(Vec::new());
        merge_with_progress(&MergeRequest::new(list.snapshot()), &CancelToken::new(), &|p| {
            phases.lock().unwrap().push(p.phase);
        })
        .unwrap();

        let phases = phases.into_inner().unwrap();
        assert_eq!(
            phases,
            vec![
                MergePhase::ReadingPacks,
                MergePhase::ReadingPacks,
                MergePhase::WritingMetadata,
                MergePhase::Serializing,
                MergePhase::Complete,
            ]
        );
    }
}
