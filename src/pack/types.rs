//! Pack identity and data types

use std::fmt;

use uuid::Uuid;

/// Opaque unique identifier for a loaded pack.
///
/// Ids are generated when a pack enters the list and are never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackId(Uuid);

impl PackId {
    /// Generate a fresh id.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A loaded resource pack: the full compressed archive held in memory.
///
/// The byte buffer is immutable once stored; the pack is owned exclusively
/// by the [`PackList`](super::PackList) that created it.
#[derive(Debug, Clone)]
pub struct Pack {
    id: PackId,
    name: String,
    data: Vec<u8>,
}

impl Pack {
    pub(crate) fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: PackId::new(),
            name: name.into(),
            data,
        }
    }

    /// Unique id of this pack.
    #[must_use]
    pub fn id(&self) -> PackId {
        self.id
    }

    /// Display name (source filename).
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Raw bytes of the compressed archive.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Size of the archive in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Size in mebibytes (bytes / 1024²).
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        self.size() as f64 / 1024.0 / 1024.0
    }

    /// Human-readable size, e.g. `"1.50 MB"` (two decimal places).
    #[must_use]
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_mb())
    }
}

/// Case-sensitive check that a filename looks like a resource pack archive.
///
/// Matches the exact `.zip` suffix; `.ZIP` is rejected on purpose so the
/// accept/reject behavior is stable across platforms.
#[must_use]
pub fn is_resource_pack_name(name: &str) -> bool {
    name.ends_with(".zip")
}
