//! Core types for the target registry

use serde::Serialize;

use crate::Category;

/// How a target names the file it receives for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FileNaming {
    /// `<dir>/<relative path>.md`, keeping the source's subdirectories.
    Flat,
    /// `<dir>/<document name>/<file_name>`, one directory per document.
    ///
    /// Source subdirectories collapse into the document name.
    FixedFilenameSubdirectory { file_name: String },
}

/// Header block prepended to skills for targets that read frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "kebab-case")]
pub enum FrontmatterStyle {
    /// `name: <document name>`
    SkillName,
    /// A fixed block of YAML lines, identical for every skill.
    Static(String),
}

impl FrontmatterStyle {
    /// Render the header block for a document, including the `---` fences
    /// and a trailing newline.
    pub fn render(&self, document_name: &str) -> String {
        match self {
            Self::SkillName => format!("---\nname: {document_name}\n---\n"),
            Self::Static(body) => format!("---\n{}\n---\n", body.trim_end()),
        }
    }
}

/// Per-category output directories, relative to the project root.
///
/// A missing entry means the target does not take part in that category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetDirectories {
    pub rules: Option<String>,
    pub skills: Option<String>,
    pub workflows: Option<String>,
}

impl TargetDirectories {
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Rules => self.rules.as_deref(),
            Category::Skills => self.skills.as_deref(),
            Category::Workflows => self.workflows.as_deref(),
        }
    }

    /// Distinct configured directories, in category order.
    ///
    /// Two categories sharing one directory yield it once.
    pub fn distinct(&self) -> Vec<(Category, &str)> {
        let mut seen: Vec<(Category, &str)> = Vec::new();
        for category in Category::ALL {
            if let Some(dir) = self.get(category)
                && !seen.iter().any(|(_, d)| *d == dir)
            {
                seen.push((category, dir));
            }
        }
        seen
    }
}

/// Complete description of one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDefinition {
    /// Machine identifier used in configuration (e.g. "cursor")
    pub id: String,
    /// Display name (e.g. "Cursor")
    pub name: String,
    pub directories: TargetDirectories,
    pub naming: FileNaming,
    /// Header for skills; `None` when the target does not read frontmatter
    pub frontmatter: Option<FrontmatterStyle>,
}

impl TargetDefinition {
    /// Create a flat-named target with no directories.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            directories: TargetDirectories::default(),
            naming: FileNaming::Flat,
            frontmatter: None,
        }
    }

    pub fn with_rules(mut self, dir: impl Into<String>) -> Self {
        self.directories.rules = Some(dir.into());
        self
    }

    pub fn with_skills(mut self, dir: impl Into<String>) -> Self {
        self.directories.skills = Some(dir.into());
        self
    }

    pub fn with_workflows(mut self, dir: impl Into<String>) -> Self {
        self.directories.workflows = Some(dir.into());
        self
    }

    /// Use one directory per document containing `file_name`.
    pub fn with_fixed_filename(mut self, file_name: impl Into<String>) -> Self {
        self.naming = FileNaming::FixedFilenameSubdirectory {
            file_name: file_name.into(),
        };
        self
    }

    pub fn with_frontmatter(mut self, style: FrontmatterStyle) -> Self {
        self.frontmatter = Some(style);
        self
    }

    /// Drop frontmatter support (per-project opt-out).
    pub fn without_frontmatter(mut self) -> Self {
        self.frontmatter = None;
        self
    }

    pub fn directory_for(&self, category: Category) -> Option<&str> {
        self.directories.get(category)
    }

    pub fn supports_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }

    /// Whether the target receives anything at all.
    pub fn has_any_directory(&self) -> bool {
        Category::ALL.iter().any(|c| self.directory_for(*c).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_sets_directories() {
        let target = TargetDefinition::new("test", "Test")
            .with_rules(".test/rules")
            .with_workflows(".test/flows");

        assert_eq!(target.directory_for(Category::Rules), Some(".test/rules"));
        assert_eq!(target.directory_for(Category::Skills), None);
        assert_eq!(target.directory_for(Category::Workflows), Some(".test/flows"));
        assert!(target.has_any_directory());
    }

    #[test]
    fn test_no_directories() {
        let target = TargetDefinition::new("test", "Test");
        assert!(!target.has_any_directory());
        assert!(!target.supports_frontmatter());
    }

    #[test]
    fn test_skill_name_frontmatter() {
        let header = FrontmatterStyle::SkillName.render("api-designer");
        assert_eq!(header, "---\nname: api-designer\n---\n");
    }

    #[test]
    fn test_static_frontmatter_ignores_name() {
        let style = FrontmatterStyle::Static("description: synced\n".into());
        assert_eq!(style.render("a"), style.render("b"));
        assert_eq!(style.render("a"), "---\ndescription: synced\n---\n");
    }

    #[test]
    fn test_distinct_directories_dedupes_shared_dir() {
        let target = TargetDefinition::new("test", "Test")
            .with_rules(".t/rules")
            .with_skills(".t/flows")
            .with_workflows(".t/flows");

        let dirs = target.directories.distinct();
        assert_eq!(
            dirs,
            vec![(Category::Rules, ".t/rules"), (Category::Skills, ".t/flows")]
        );
    }

    #[test]
    fn test_without_frontmatter() {
        let target = TargetDefinition::new("test", "Test")
            .with_frontmatter(FrontmatterStyle::SkillName)
            .without_frontmatter();
        assert!(!target.supports_frontmatter());
    }
}
