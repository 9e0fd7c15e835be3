//! Types for merge progress tracking and cancellation

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Progress callback type for merge operations
pub type MergeProgressCallback<'a> = &'a (dyn Fn(&MergeProgress) + Sync + Send);

/// Progress information during a merge
#[derive(Debug, Clone)]
pub struct MergeProgress {
    /// Current operation phase
    pub phase: MergePhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Pack currently being processed (if applicable)
    pub current_pack: Option<String>,
}

impl MergeProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: MergePhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_pack: None,
        }
    }

    /// Create a progress update with a pack name
    #[must_use]
    pub fn with_pack(
        phase: MergePhase,
        current: usize,
        total: usize,
        pack: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_pack: Some(pack.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a merge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePhase {
    /// Reading input packs in ascending priority order
    ReadingPacks,
    /// Writing pack.png and pack.mcmeta
    WritingMetadata,
    /// Serializing the combined archive
    Serializing,
    /// Operation complete
    Complete,
}

impl MergePhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingPacks => "Reading packs",
            Self::WritingMetadata => "Writing metadata",
            Self::Serializing => "Serializing archive",
            Self::Complete => "Complete",
        }
    }
}

/// Cooperative cancellation token for a merge.
///
/// Checked between pack-processing steps, never mid-entry, so a cancelled
/// merge leaves no partially written archive.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the merge holding this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
