//! Outcome of one synchronization pass

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use toolkit_fs::NormalizedPath;
use toolkit_targets::Category;

/// A (document, destination) pair that was not written because the
/// destination has no directory for the document's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPair {
    pub target_id: String,
    pub category: Category,
    /// Category-relative path of the document
    pub document: String,
}

/// A managed file on disk that the current pass did not produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanCandidate {
    /// Path relative to the project root
    pub relative_path: String,
    pub absolute_path: NormalizedPath,
    pub target_id: String,
    /// Destination directory the file was found under; pruning of empty
    /// directories after removal stops here
    pub scan_root: NormalizedPath,
}

/// A document present in the shared root but not in the local tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedOrphan {
    pub category: Category,
    pub name: String,
    pub path: NormalizedPath,
}

/// Which side of a divergence was modified more recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    LocalNewer,
    SharedNewer,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalNewer => write!(f, "local-newer"),
            Self::SharedNewer => write!(f, "shared-newer"),
        }
    }
}

/// A same-named document whose local and shared contents differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivergenceRecord {
    pub category: Category,
    pub name: String,
    pub local_path: NormalizedPath,
    pub shared_path: NormalizedPath,
    pub direction: Direction,
    pub local_modified: Option<DateTime<Utc>>,
    pub shared_modified: Option<DateTime<Utc>>,
}

/// Everything one pass did and found.
///
/// Created fresh for every run and never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncRunResult {
    /// Whether the pass ran in preview mode
    pub dry_run: bool,
    /// Every destination path produced (or that would be produced in preview mode)
    pub written: BTreeSet<NormalizedPath>,
    /// Every destination path a current document or override maps to,
    /// including writes that failed. Files at these paths are never orphans.
    pub expected: BTreeSet<NormalizedPath>,
    /// Human-readable description of each change, e.g. "Wrote ..." or
    /// "[dry-run] Would write ..."
    pub actions: Vec<String>,
    pub skipped: Vec<SkippedPair>,
    pub removed: Vec<NormalizedPath>,
    /// Per-item failures; the pass carried on past each of them
    pub errors: Vec<String>,
    /// Sources that could not be used and similar non-fatal notices
    pub warnings: Vec<String>,
    /// Orphans awaiting confirmation
    pub pending_orphans: Vec<OrphanCandidate>,
    pub shared_orphans: Vec<SharedOrphan>,
    pub divergences: Vec<DivergenceRecord>,
    /// Shared-root paths created by auto-promotion
    pub promoted: Vec<NormalizedPath>,
}

impl SyncRunResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// True when no per-item error was recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when nothing needs the caller's attention.
    pub fn is_clean(&self) -> bool {
        self.pending_orphans.is_empty()
            && self.shared_orphans.is_empty()
            && self.divergences.is_empty()
    }

    pub(crate) fn record_error(&mut self, message: String) {
        tracing::error!("{message}");
        self.errors.push(message);
    }

    pub(crate) fn record_warning(&mut self, message: String) {
        tracing::warn!("{message}");
        self.warnings.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_clean_and_successful() {
        let result = SyncRunResult::new(true);
        assert!(result.dry_run);
        assert!(result.is_success());
        assert!(result.is_clean());
    }

    #[test]
    fn test_errors_fail_the_run() {
        let mut result = SyncRunResult::new(false);
        result.record_error("boom".into());
        assert!(!result.is_success());
    }

    #[test]
    fn test_direction_serializes_kebab_case() {
        let json = serde_json::to_string(&Direction::LocalNewer).unwrap();
        assert_eq!(json, "\"local-newer\"");
        assert_eq!(Direction::SharedNewer.to_string(), "shared-newer");
    }
}
