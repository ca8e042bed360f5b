//! Applying a caller's decision about a reported item

use toolkit_fs::io;

use super::report::{DivergenceRecord, OrphanCandidate, SharedOrphan};
use crate::Result;
use crate::content::MANAGED_MARKER;

/// Which copy survives a divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Overwrite the shared copy with the local one
    KeepLocal,
    /// Overwrite the local copy with the shared one
    KeepShared,
}

pub fn apply_divergence(record: &DivergenceRecord, resolution: Resolution) -> Result<()> {
    let (from, to) = match resolution {
        Resolution::KeepLocal => (&record.local_path, &record.shared_path),
        Resolution::KeepShared => (&record.shared_path, &record.local_path),
    };
    io::copy_file(from, to)?;
    tracing::info!(category = %record.category, name = %record.name, from = %from, to = %to, "Resolved divergence");
    Ok(())
}

/// Delete a document from the shared root.
pub fn remove_shared_orphan(orphan: &SharedOrphan) -> Result<()> {
    io::remove_file(&orphan.path)?;
    tracing::info!(category = %orphan.category, name = %orphan.name, path = %orphan.path, "Removed from shared root");
    Ok(())
}

/// Delete an orphaned destination file.
///
/// The marker is checked again first; a file that lost it since detection
/// is left alone and reported as an error. Directories emptied by the
/// removal are pruned up to the destination directory.
pub fn remove_orphan(candidate: &OrphanCandidate) -> Result<()> {
    io::remove_if_marked(&candidate.absolute_path, MANAGED_MARKER)?;
    if let Some(parent) = candidate.absolute_path.parent() {
        io::prune_empty_dirs(&parent, &candidate.scan_root);
    }
    tracing::info!(target = %candidate.target_id, path = %candidate.absolute_path, "Removed orphan");
    Ok(())
}
