//! Content synchronization and reconciliation engine for ai-toolkit
//!
//! One authored tree of markdown documents (`.ai-content/{rules,skills,workflows}`)
//! is merged with any configured external sources and fanned out to every
//! enabled destination layout. A pass then looks for destination files it
//! wrote previously but no longer produces, and compares the local tree
//! with an optional shared root used across projects.
//!
//! # Architecture
//!
//! ```text
//!                 toolkit-cli
//!                      |
//!                 toolkit-core
//!          +-----------+-----------+
//!          |                       |
//!     toolkit-fs            toolkit-targets
//! ```
//!
//! A pass (see [`SyncEngine::run`]) is strictly sequential:
//!
//! 1. [`ContentResolver`] loads external sources; local documents win name clashes
//! 2. [`FanOutWriter`] renders and writes every (document, target) pair
//! 3. [`detect_orphans`] finds marker-bearing files no current document maps to
//! 4. [`AutoPromoter`] copies local-only documents into the shared root
//! 5. [`SsotReconciler`] reports shared orphans and divergences

pub mod config;
pub mod content;
pub mod discovery;
pub mod error;
pub mod sources;
pub mod sync;

pub use config::{ContentSource, EditorSetting, ToolkitConfig};
pub use content::{Categorized, Document, DocumentStore, MANAGED_MARKER};
pub use discovery::discover_projects;
pub use error::{Error, Result};
pub use sources::{ContentResolver, merge_category};
pub use sync::{
    AutoPromoter, Direction, DivergenceRecord, FanOutWriter, ModifiedTimeRecency,
    OrphanCandidate, Recency, RecencyStrategy, Resolution, SharedOrphan, SkippedPair,
    SsotReconciler, SyncEngine, SyncOptions, SyncRunResult, apply_divergence, detect_orphans,
    promote_file, remove_orphan, remove_shared_orphan,
};
pub use toolkit_targets::Category;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_config_not_found_displays_path() {
        let error = Error::ConfigNotFound {
            path: PathBuf::from("/path/to/ai-toolkit.yaml"),
        };

        let display = error.to_string();
        assert!(display.contains("/path/to/ai-toolkit.yaml"), "got: {display}");
    }

    #[test]
    fn error_promote_conflict_mentions_force() {
        let error = Error::PromoteConflict {
            path: PathBuf::from("/shared/skills/a.md"),
        };
        assert!(error.to_string().contains("--force"));
    }
}
