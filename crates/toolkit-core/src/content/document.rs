use serde::Serialize;
use toolkit_fs::{NormalizedPath, ToolkitPath};
use toolkit_targets::Category;

/// First line of every file the fan-out writer produces.
///
/// Orphan detection treats a destination file as managed if and only if
/// its first line is exactly this text, so it must never change between
/// releases.
pub const MANAGED_MARKER: &str = "<!-- Auto-generated by ai-toolkit. Do not edit directly. -->";

/// Origin label of documents from the project's own content root.
pub const LOCAL_ORIGIN: &str = "local";

/// A markdown document from a content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub category: Category,
    /// File stem; the identity used for merging and reconciliation
    pub name: String,
    /// Location below the category folder, e.g. `specialists/api.md`
    pub relative_path: NormalizedPath,
    pub content: String,
    /// "local" or the configured source that produced the document
    pub origin: String,
    /// Where the content was read from
    pub source_path: NormalizedPath,
}

impl Document {
    /// The path recorded in the managed banner, e.g. `.ai-content/skills/api.md`.
    pub fn qualified_path(&self) -> String {
        format!(
            "{}/{}/{}",
            ToolkitPath::ContentDir,
            self.category,
            self.relative_path
        )
    }

    pub fn is_local(&self) -> bool {
        self.origin == LOCAL_ORIGIN
    }
}
