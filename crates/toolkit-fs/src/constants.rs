//! Well-known names of the ai-toolkit project layout.

use std::path::Path;

/// Fixed path segments used by ai-toolkit projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolkitPath {
    /// The `.ai-content` directory (local content root)
    ContentDir,
    /// The `overrides` directory inside the content root
    OverridesDir,
    /// The `templates` directory a shared checkout may keep its content in
    TemplatesDir,
    /// The `node_modules` directory searched for package sources
    NodeModulesDir,
    /// The `ai-toolkit.yaml` project configuration
    ConfigFile,
    /// The `ai-toolkit.yml` spelling of the configuration
    ConfigFileAlt,
}

impl ToolkitPath {
    /// Get the string representation of the path.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ContentDir => ".ai-content",
            Self::OverridesDir => "overrides",
            Self::TemplatesDir => "templates",
            Self::NodeModulesDir => "node_modules",
            Self::ConfigFile => "ai-toolkit.yaml",
            Self::ConfigFileAlt => "ai-toolkit.yml",
        }
    }

    /// Config file names in lookup order.
    pub fn config_files() -> [ToolkitPath; 2] {
        [Self::ConfigFile, Self::ConfigFileAlt]
    }
}

impl AsRef<Path> for ToolkitPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ToolkitPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ToolkitPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
