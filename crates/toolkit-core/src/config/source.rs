use serde::{Deserialize, Serialize};
use toolkit_targets::Category;

/// An external root that contributes documents.
///
/// ```yaml
/// content_sources:
///   - type: local
///     path: ../shared-ai
///     include: [rules, skills]
///   - type: package
///     name: "@acme/ai-rules"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentSource {
    /// A directory on disk: absolute, `~/...`, or relative to the project root
    Local {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include: Option<Vec<Category>>,
    },
    /// An installed package located through `node_modules`
    Package {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include: Option<Vec<Category>>,
    },
}

impl ContentSource {
    pub fn local(path: impl Into<String>) -> Self {
        Self::Local {
            path: path.into(),
            include: None,
        }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Self::Package {
            name: name.into(),
            include: None,
        }
    }

    /// Restrict the source to the given categories.
    pub fn with_include(self, categories: Vec<Category>) -> Self {
        match self {
            Self::Local { path, .. } => Self::Local {
                path,
                include: Some(categories),
            },
            Self::Package { name, .. } => Self::Package {
                name,
                include: Some(categories),
            },
        }
    }

    /// Requested categories; all of them when `include` is absent.
    pub fn categories(&self) -> Vec<Category> {
        let include = match self {
            Self::Local { include, .. } | Self::Package { include, .. } => include,
        };
        include.clone().unwrap_or_else(|| Category::ALL.to_vec())
    }

    /// Human-readable provenance used as the documents' origin label.
    pub fn label(&self) -> &str {
        match self {
            Self::Local { path, .. } => path,
            Self::Package { name, .. } => name,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_categories_are_all() {
        assert_eq!(ContentSource::local("../shared").categories(), Category::ALL.to_vec());
    }

    #[test]
    fn include_restricts_categories() {
        let source = ContentSource::package("@acme/rules").with_include(vec![Category::Rules]);
        assert_eq!(source.categories(), vec![Category::Rules]);
        assert_eq!(source.label(), "@acme/rules");
        assert!(!source.is_local());
    }

    #[test]
    fn parses_tagged_yaml() {
        let yaml = "- type: local\n  path: ../shared\n  include: [skills]\n- type: package\n  name: kit\n";
        let sources: Vec<ContentSource> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            sources,
            vec![
                ContentSource::local("../shared").with_include(vec![Category::Skills]),
                ContentSource::package("kit"),
            ]
        );
    }
}
