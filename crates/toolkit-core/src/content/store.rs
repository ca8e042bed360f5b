//! Reading documents from a content root

use std::fs;

use toolkit_fs::{Error as FsError, NormalizedPath, io};
use toolkit_targets::Category;

use super::{Categorized, Document};
use crate::Result;

const MARKDOWN_EXTENSION: &str = "md";

/// Reads the category folders below one content root.
///
/// Stateless: every call goes back to disk and returns owned copies of
/// the content.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: NormalizedPath,
    origin: String,
}

impl DocumentStore {
    /// Create a store for `root`, labelling its documents with `origin`.
    pub fn new(root: NormalizedPath, origin: impl Into<String>) -> Self {
        Self {
            root,
            origin: origin.into(),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn category_dir(&self, category: Category) -> NormalizedPath {
        self.root.join(category.dir_name())
    }

    /// Load every document of one category, recursively.
    ///
    /// A missing category folder yields an empty list. Files that cannot
    /// be read are logged and skipped.
    pub fn load(&self, category: Category) -> Result<Vec<Document>> {
        let category_dir = self.category_dir(category);
        let mut documents = Vec::new();

        for path in walk_markdown(&category_dir)? {
            let Some(relative) = path.strip_prefix(&category_dir) else {
                continue;
            };
            let relative_path = NormalizedPath::new(relative);
            let name = relative_path.file_stem().unwrap_or_default().to_string();

            match io::read_text(&path) {
                Ok(content) => documents.push(Document {
                    category,
                    name,
                    relative_path,
                    content,
                    origin: self.origin.clone(),
                    source_path: path,
                }),
                Err(e) => tracing::warn!(path = %path, error = %e, "Skipping unreadable document"),
            }
        }

        Ok(documents)
    }

    /// Load all three categories.
    pub fn load_all(&self) -> Result<Categorized<Vec<Document>>> {
        Ok(Categorized {
            rules: self.load(Category::Rules)?,
            skills: self.load(Category::Skills)?,
            workflows: self.load(Category::Workflows)?,
        })
    }
}

/// Every `*.md` file below `dir`, depth-first, sorted by entry name.
///
/// A missing directory yields an empty list. Failing to list `dir` itself
/// is an error; a nested directory that cannot be listed is logged and
/// skipped.
pub fn walk_markdown(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let mut files = Vec::new();
    if dir.is_dir() {
        for path in list_sorted(dir)? {
            walk_into(path, &mut files);
        }
    }
    Ok(files)
}

fn walk_into(path: NormalizedPath, files: &mut Vec<NormalizedPath>) {
    // Symlinked directories are not followed
    let is_dir = fs::symlink_metadata(path.to_native()).is_ok_and(|m| m.is_dir());
    if is_dir {
        match list_sorted(&path) {
            Ok(children) => {
                for child in children {
                    walk_into(child, files);
                }
            }
            Err(e) => tracing::warn!(dir = %path, error = %e, "Skipping unreadable directory"),
        }
    } else if path.is_file() && path.extension() == Some(MARKDOWN_EXTENSION) {
        files.push(path);
    }
}

fn list_sorted(dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let mut names = fs::read_dir(&native)
        .map_err(|e| FsError::io(&native, e))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().to_string()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| FsError::io(&native, e))?;
    names.sort();
    Ok(names.iter().map(|name| dir.join(name)).collect())
}
