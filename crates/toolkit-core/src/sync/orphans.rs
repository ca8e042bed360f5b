//! Finding managed destination files that no document produces any more

use std::collections::{BTreeSet, HashSet};

use toolkit_fs::{NormalizedPath, io};
use toolkit_targets::TargetDefinition;

use super::report::OrphanCandidate;
use crate::content::{MANAGED_MARKER, walk_markdown};

/// Every file under an enabled target's directories whose first line is
/// the managed marker and which is not in `expected`, the set of paths
/// the current documents map to.
///
/// Read-only. Files without the marker are never candidates. A file
/// reachable through more than one directory (shared or nested
/// destination directories) is reported once.
pub fn detect_orphans(
    root: &NormalizedPath,
    targets: &[TargetDefinition],
    expected: &BTreeSet<NormalizedPath>,
) -> Vec<OrphanCandidate> {
    let mut seen: HashSet<NormalizedPath> = HashSet::new();
    let mut orphans = Vec::new();

    for target in targets {
        for (_, dir) in target.directories.distinct() {
            let scan_root = root.join(dir);
            let files = match walk_markdown(&scan_root) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!(dir = %scan_root, error = %e, "Cannot scan destination directory");
                    continue;
                }
            };

            for path in files {
                if expected.contains(&path) || !seen.insert(path.clone()) {
                    continue;
                }
                if !io::has_marker_line(&path, MANAGED_MARKER) {
                    continue;
                }
                tracing::debug!(target = %target.id, path = %path, "Orphan candidate");
                orphans.push(OrphanCandidate {
                    relative_path: path.strip_prefix(root).unwrap_or(path.as_str()).to_string(),
                    absolute_path: path,
                    target_id: target.id.clone(),
                    scan_root: scan_root.clone(),
                });
            }
        }
    }

    orphans
}
