//! Copying local documents into the shared root

use toolkit_fs::{NormalizedPath, ToolkitPath, io};
use toolkit_targets::Category;

use super::report::SyncRunResult;
use super::ssot::names_in;
use crate::content::{DocumentStore, LOCAL_ORIGIN};
use crate::{Error, Result};

/// Mirrors local-only documents into the shared root before reconciliation.
pub struct AutoPromoter {
    local_root: NormalizedPath,
    shared_root: NormalizedPath,
}

impl AutoPromoter {
    pub fn new(local_root: NormalizedPath, shared_root: NormalizedPath) -> Self {
        Self {
            local_root,
            shared_root,
        }
    }

    /// Copy every local document whose name does not exist in the shared
    /// root to `<shared>/<category>/<relative path>`.
    ///
    /// Never overwrites; same-named documents are left to the divergence scan.
    pub fn promote_missing(&self, categories: &[Category], result: &mut SyncRunResult) -> Result<()> {
        let local_store = DocumentStore::new(self.local_root.clone(), LOCAL_ORIGIN);

        for &category in categories {
            let local = local_store.load(category)?;
            if local.is_empty() {
                continue;
            }
            let shared_names = names_in(&self.shared_root, category)?;

            for document in local {
                if shared_names.contains(&document.name) {
                    continue;
                }
                let destination = self
                    .shared_root
                    .join(category.dir_name())
                    .join(document.relative_path.as_str());
                if destination.exists() {
                    continue;
                }

                match io::copy_file(&document.source_path, &destination) {
                    Ok(()) => {
                        tracing::info!(%category, name = %document.name, to = %destination, "Promoted to shared root");
                        result.promoted.push(destination);
                    }
                    Err(e) => result.record_error(format!(
                        "Failed to promote {}: {e}",
                        document.qualified_path()
                    )),
                }
            }
        }

        Ok(())
    }
}

/// Promote one file from `<project>/.ai-content` into the shared root.
///
/// `file` may be `.ai-content/<category>/...`, `<category>/...`, or an
/// absolute path inside the content root. The category is taken from the
/// first component. An existing shared file is only replaced with `force`.
///
/// Returns the shared path written.
pub fn promote_file(
    project_root: &NormalizedPath,
    shared_root: &NormalizedPath,
    file: &str,
    force: bool,
) -> Result<NormalizedPath> {
    let content_root = project_root.join(ToolkitPath::ContentDir.as_str());
    let relative = content_relative(&content_root, file).ok_or_else(|| Error::UnknownCategory {
        path: file.to_string(),
    })?;

    let relative = NormalizedPath::new(relative);
    if relative.as_str().split('/').any(|c| c == "..") {
        return Err(Error::PathEscapesRoot {
            path: file.to_string(),
        });
    }
    let category: Category = relative
        .first_component()
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| Error::UnknownCategory {
            path: file.to_string(),
        })?;

    let source = content_root.join(relative.as_str());
    if !source.is_file() {
        return Err(Error::PromoteSourceMissing {
            path: source.to_native(),
        });
    }

    let destination = shared_root.join(relative.as_str());
    if destination.exists() && !force {
        return Err(Error::PromoteConflict {
            path: destination.to_native(),
        });
    }

    io::copy_file(&source, &destination)?;
    tracing::info!(%category, from = %source, to = %destination, "Promoted to shared root");
    Ok(destination)
}

/// `file` expressed relative to the content root, if it can be.
fn content_relative(content_root: &NormalizedPath, file: &str) -> Option<String> {
    let path = NormalizedPath::new(file);

    if path.is_absolute() {
        if let Some(rest) = path.strip_prefix(content_root) {
            return Some(rest.to_string());
        }
        // Symlinked spellings of the project root
        let canonical = path.canonicalize().ok()?;
        let canonical_root = content_root.canonicalize().ok()?;
        return canonical.strip_prefix(&canonical_root).map(str::to_string);
    }

    let trimmed = file.trim_start_matches("./");
    let prefix = format!("{}/", ToolkitPath::ContentDir);
    Some(trimmed.strip_prefix(&prefix).unwrap_or(trimmed).to_string())
}
