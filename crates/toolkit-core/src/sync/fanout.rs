//! Writes the merged documents into every destination layout

use toolkit_fs::{NormalizedPath, ToolkitPath, io};
use toolkit_targets::{Category, FileNaming, TargetDefinition};

use super::report::{SkippedPair, SyncRunResult};
use crate::content::{Categorized, Document, MANAGED_MARKER, walk_markdown};

/// Produces one output file per applicable (document, target) pair.
pub struct FanOutWriter {
    root: NormalizedPath,
    dry_run: bool,
}

impl FanOutWriter {
    /// Create a writer for the project at `root`.
    ///
    /// With `dry_run` nothing is written, but every path is still recorded
    /// as if it had been.
    pub fn new(root: NormalizedPath, dry_run: bool) -> Self {
        Self { root, dry_run }
    }

    /// Where `document` lands for `target`, or `None` when the target does
    /// not take part in the document's category.
    pub fn output_path(&self, target: &TargetDefinition, document: &Document) -> Option<NormalizedPath> {
        let dir = self.root.join(target.directory_for(document.category)?);
        let path = match &target.naming {
            FileNaming::Flat => dir.join(document.relative_path.with_extension("md").as_str()),
            FileNaming::FixedFilenameSubdirectory { file_name } => {
                dir.join(&document.name).join(file_name)
            }
        };
        Some(path)
    }

    /// Full file content for `document` as `target` receives it.
    ///
    /// The marker line and source comment come first and never depend on
    /// the target. Skills get the target's frontmatter block after them.
    pub fn render(target: &TargetDefinition, document: &Document) -> String {
        let frontmatter = match (&target.frontmatter, document.category) {
            (Some(style), Category::Skills) => style.render(&document.name),
            _ => String::new(),
        };
        format!(
            "{MANAGED_MARKER}\n<!-- Source: {} -->\n\n{frontmatter}{}",
            document.qualified_path(),
            document.content
        )
    }

    /// Write every document to every target that accepts its category.
    ///
    /// A path already claimed in this pass (an override, or a same-named
    /// document of a category sharing the directory) keeps its first
    /// producer; the later document is skipped with a warning.
    pub fn write_all(
        &self,
        documents: &Categorized<Vec<Document>>,
        targets: &[TargetDefinition],
        result: &mut SyncRunResult,
    ) {
        for (category, docs) in documents.iter() {
            for document in docs {
                for target in targets {
                    let Some(path) = self.output_path(target, document) else {
                        tracing::debug!(
                            target = %target.id,
                            %category,
                            document = %document.relative_path,
                            "Target has no directory for category"
                        );
                        result.skipped.push(SkippedPair {
                            target_id: target.id.clone(),
                            category,
                            document: document.relative_path.to_string(),
                        });
                        continue;
                    };
                    if result.expected.contains(&path) {
                        result.record_warning(format!(
                            "{} not written for {}: {path} is already produced by another document or override",
                            document.qualified_path(),
                            target.id
                        ));
                        continue;
                    }
                    let content = Self::render(target, document);
                    self.write_one(&path, content.as_bytes(), result);
                }
            }
        }
    }

    /// Copy `<content_root>/overrides/<target id>/**.md` verbatim into each
    /// target's rules directory.
    ///
    /// Overrides carry no marker, so they are never reported as orphans.
    pub fn write_overrides(
        &self,
        content_root: &NormalizedPath,
        targets: &[TargetDefinition],
        result: &mut SyncRunResult,
    ) {
        let overrides_root = content_root.join(ToolkitPath::OverridesDir.as_str());
        if !overrides_root.is_dir() {
            return;
        }

        for target in targets {
            let target_dir = overrides_root.join(&target.id);
            let files = match walk_markdown(&target_dir) {
                Ok(files) => files,
                Err(e) => {
                    result.record_error(format!("Cannot read overrides for {}: {e}", target.id));
                    continue;
                }
            };

            for source in files {
                let Some(relative) = source.strip_prefix(&target_dir) else {
                    continue;
                };
                let Some(rules_dir) = target.directory_for(Category::Rules) else {
                    result.skipped.push(SkippedPair {
                        target_id: target.id.clone(),
                        category: Category::Rules,
                        document: relative.to_string(),
                    });
                    continue;
                };
                let destination = self.root.join(rules_dir).join(relative);

                match std::fs::read(source.to_native()) {
                    Ok(bytes) => self.write_one(&destination, &bytes, result),
                    Err(e) => result.record_error(format!("Cannot read override {source}: {e}")),
                }
            }
        }
    }

    fn write_one(&self, path: &NormalizedPath, content: &[u8], result: &mut SyncRunResult) {
        result.expected.insert(path.clone());

        let unchanged = std::fs::read(path.to_native())
            .map(|existing| existing == content)
            .unwrap_or(false);

        if unchanged {
            tracing::debug!(path = %path, "Unchanged");
        } else if self.dry_run {
            result.actions.push(format!("[dry-run] Would write {path}"));
        } else {
            if let Err(e) = io::write_atomic(path, content) {
                result.record_error(format!("Failed to write {path}: {e}"));
                return;
            }
            tracing::info!(path = %path, "Synced");
            result.actions.push(format!("Wrote {path}"));
        }

        result.written.insert(path.clone());
    }
}
