//! Reconciliation of the local content tree against the shared root

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use toolkit_fs::{NormalizedPath, io};
use toolkit_targets::Category;

use super::report::{Direction, DivergenceRecord, SharedOrphan, SyncRunResult};
use crate::Result;
use crate::content::{Document, DocumentStore, LOCAL_ORIGIN};

/// Decision about which side of a divergence is newer, with the evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recency {
    pub direction: Direction,
    pub local_modified: Option<DateTime<Utc>>,
    pub shared_modified: Option<DateTime<Utc>>,
}

/// Decides the direction of a divergence.
///
/// Callers only see the resulting [`Recency`], so the modification-time
/// heuristic can be replaced (e.g. by content hashes with history).
pub trait RecencyStrategy {
    fn compare(&self, local: &NormalizedPath, shared: &NormalizedPath) -> Result<Recency>;
}

/// Local is newer when its modification time is at least the shared one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedTimeRecency;

impl RecencyStrategy for ModifiedTimeRecency {
    fn compare(&self, local: &NormalizedPath, shared: &NormalizedPath) -> Result<Recency> {
        let local_modified = io::modified_time(local)?;
        let shared_modified = io::modified_time(shared)?;

        let direction = if local_modified >= shared_modified {
            Direction::LocalNewer
        } else {
            Direction::SharedNewer
        };

        Ok(Recency {
            direction,
            local_modified: Some(local_modified.into()),
            shared_modified: Some(shared_modified.into()),
        })
    }
}

/// Compares a local content root with a shared root.
pub struct SsotReconciler {
    local_root: NormalizedPath,
    shared_root: NormalizedPath,
    strategy: Box<dyn RecencyStrategy>,
}

impl SsotReconciler {
    /// Create a reconciler using [`ModifiedTimeRecency`].
    pub fn new(local_root: NormalizedPath, shared_root: NormalizedPath) -> Self {
        Self::with_strategy(local_root, shared_root, Box::new(ModifiedTimeRecency))
    }

    pub fn with_strategy(
        local_root: NormalizedPath,
        shared_root: NormalizedPath,
        strategy: Box<dyn RecencyStrategy>,
    ) -> Self {
        Self {
            local_root,
            shared_root,
            strategy,
        }
    }

    /// Run the shared-orphan and divergence scans for `categories`.
    ///
    /// Records go into `result`; a failure to compare one pair is recorded
    /// as an error and the scan continues.
    pub fn reconcile(&self, categories: &[Category], result: &mut SyncRunResult) -> Result<()> {
        let local_store = DocumentStore::new(self.local_root.clone(), LOCAL_ORIGIN);
        let shared_store = DocumentStore::new(self.shared_root.clone(), self.shared_root.as_str());

        for &category in categories {
            let shared = by_name(shared_store.load(category)?);
            if shared.is_empty() {
                continue;
            }
            let local = by_name(local_store.load(category)?);

            for (name, doc) in &shared {
                if !local.contains_key(name) {
                    tracing::info!(%category, name = %name, "Shared document missing locally");
                    result.shared_orphans.push(SharedOrphan {
                        category,
                        name: name.clone(),
                        path: doc.source_path.clone(),
                    });
                }
            }

            for (name, local_doc) in &local {
                let Some(shared_doc) = shared.get(name) else {
                    continue;
                };
                if local_doc.content.as_bytes() == shared_doc.content.as_bytes() {
                    continue;
                }
                match self
                    .strategy
                    .compare(&local_doc.source_path, &shared_doc.source_path)
                {
                    Ok(recency) => {
                        tracing::info!(%category, name = %name, direction = %recency.direction, "Divergence");
                        result.divergences.push(DivergenceRecord {
                            category,
                            name: name.clone(),
                            local_path: local_doc.source_path.clone(),
                            shared_path: shared_doc.source_path.clone(),
                            direction: recency.direction,
                            local_modified: recency.local_modified,
                            shared_modified: recency.shared_modified,
                        });
                    }
                    Err(e) => result.record_error(format!(
                        "Cannot compare {} with {}: {e}",
                        local_doc.source_path, shared_doc.source_path
                    )),
                }
            }
        }

        Ok(())
    }
}

/// Index documents by name anywhere in the category tree; the last one wins.
fn by_name(documents: Vec<Document>) -> BTreeMap<String, Document> {
    documents.into_iter().map(|d| (d.name.clone(), d)).collect()
}

/// Names of the documents in one category of `root`.
pub(crate) fn names_in(root: &NormalizedPath, category: Category) -> Result<HashSet<String>> {
    let documents = DocumentStore::new(root.clone(), root.as_str()).load(category)?;
    Ok(documents.into_iter().map(|d| d.name).collect())
}
