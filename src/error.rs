//! Error types for `MineMerge`

use thiserror::Error;

/// The error type for `MineMerge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Read Errors ====================
    /// The byte content of an input file could not be retrieved.
    #[error("failed to read pack '{name}': {source}")]
    ReadPack {
        /// Display name of the file that could not be read.
        name: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Validation Errors ====================
    /// A merge was requested with no packs in the list.
    #[error("pack list is empty: add at least one resource pack before merging")]
    EmptyPackList,

    /// The output name is unusable even after defaulting.
    #[error("invalid output name: {0:?}")]
    InvalidOutputName(String),

    // ==================== Merge Errors ====================
    /// An input pack is not a readable ZIP archive.
    #[error("failed to open pack '{name}' as a ZIP archive: {source}")]
    OpenPack {
        /// Display name of the offending pack.
        name: String,
        /// The underlying ZIP error.
        source: zip::result::ZipError,
    },

    /// An entry inside an input pack could not be read.
    #[error("failed to read entry '{entry}' from pack '{name}': {source}")]
    ReadEntry {
        /// Display name of the offending pack.
        name: String,
        /// Path of the entry inside the archive.
        entry: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The merged archive could not be serialized.
    #[error("failed to write merged archive: {0}")]
    WriteArchive(#[from] zip::result::ZipError),

    /// The merge was cancelled between processing steps.
    #[error("merge cancelled")]
    Cancelled,

    // ==================== Icon Errors ====================
    /// The default pack icon could not be encoded as PNG.
    #[error("failed to encode pack icon: {0}")]
    IconEncode(#[from] image::ImageError),

    // ==================== Metadata Errors ====================
    /// JSON serialization error (pack.mcmeta).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for `MineMerge` operations.
pub type Result<T> = std::result::Result<T, Error>;
