//! Resolving configured sources to content roots

use toolkit_fs::{NormalizedPath, ToolkitPath};

use super::merge_all;
use crate::Result;
use crate::config::ContentSource;
use crate::content::{Categorized, Document, DocumentStore, LOCAL_ORIGIN};

/// Subdirectories that hold the content inside a package.
const PACKAGE_CONTENT_DIRS: [&str; 2] = [ToolkitPath::ContentDir.as_str(), "content"];

/// Subdirectories that hold the content inside a local source directory.
const LOCAL_CONTENT_DIRS: [&str; 2] = [
    ToolkitPath::ContentDir.as_str(),
    ToolkitPath::TemplatesDir.as_str(),
];

const PACKAGE_MANIFEST: &str = "package.json";

/// Turns [`ContentSource`] descriptors into loaded documents.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    project_root: NormalizedPath,
}

impl ContentResolver {
    pub fn new(project_root: NormalizedPath) -> Self {
        Self { project_root }
    }

    /// Resolve a source to the directory holding its category folders.
    ///
    /// Returns `None` when the source cannot be located.
    pub fn resolve_root(&self, source: &ContentSource) -> Option<NormalizedPath> {
        let (base, candidates) = match source {
            ContentSource::Local { path, .. } => (self.resolve_local(path)?, LOCAL_CONTENT_DIRS),
            ContentSource::Package { name, .. } => {
                (self.resolve_package(name)?, PACKAGE_CONTENT_DIRS)
            }
        };

        let root = candidates
            .iter()
            .map(|dir| base.join(dir))
            .find(|candidate| candidate.is_dir())
            .unwrap_or(base);

        match root.canonicalize() {
            Ok(canonical) => Some(canonical),
            Err(e) => {
                tracing::warn!(root = %root, error = %e, "Cannot canonicalize content root");
                None
            }
        }
    }

    fn resolve_local(&self, path: &str) -> Option<NormalizedPath> {
        let expanded = if path == "~" || path.starts_with("~/") {
            let home = NormalizedPath::new(dirs::home_dir()?);
            home.join(path.trim_start_matches('~'))
        } else {
            let candidate = NormalizedPath::new(path);
            if candidate.is_absolute() {
                candidate
            } else {
                self.project_root.join(path)
            }
        };

        expanded.is_dir().then_some(expanded)
    }

    /// Node-style lookup: `node_modules/<name>` in the project root or any ancestor.
    fn resolve_package(&self, name: &str) -> Option<NormalizedPath> {
        let mut dir = Some(self.project_root.clone());
        while let Some(current) = dir {
            let package = current
                .join(ToolkitPath::NodeModulesDir.as_str())
                .join(name);
            if package.join(PACKAGE_MANIFEST).is_file() {
                return Some(package);
            }
            dir = current.parent();
        }
        None
    }

    /// Load the requested categories of every source, in configured order.
    ///
    /// Unresolvable or unreadable sources are skipped; a message for each
    /// is appended to `warnings`.
    pub fn load_external(
        &self,
        sources: &[ContentSource],
        warnings: &mut Vec<String>,
    ) -> Categorized<Vec<Document>> {
        let mut external = Categorized::<Vec<Document>>::default();

        for source in sources {
            let Some(root) = self.resolve_root(source) else {
                let message = format!("Content source not found: {}", source.label());
                tracing::warn!(source = %source.label(), "Content source not found, skipping");
                warnings.push(message);
                continue;
            };
            tracing::info!(source = %source.label(), root = %root, "Using content source");

            let store = DocumentStore::new(root, source.label());
            for category in source.categories() {
                match store.load(category) {
                    Ok(documents) => external.get_mut(category).extend(documents),
                    Err(e) => {
                        tracing::warn!(source = %source.label(), %category, error = %e, "Cannot read content source");
                        warnings.push(format!(
                            "Cannot read {category} from {}: {e}",
                            source.label()
                        ));
                    }
                }
            }
        }

        external
    }

    /// Load local documents from `local_root` and merge them over every source.
    pub fn resolve(
        &self,
        local_root: &NormalizedPath,
        sources: &[ContentSource],
        warnings: &mut Vec<String>,
    ) -> Result<Categorized<Vec<Document>>> {
        let local = DocumentStore::new(local_root.clone(), LOCAL_ORIGIN).load_all()?;
        let external = self.load_external(sources, warnings);
        Ok(merge_all(external, local))
    }
}
