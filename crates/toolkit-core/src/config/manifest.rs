//! Parsed `ai-toolkit.yaml`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use toolkit_fs::{ConfigStore, NormalizedPath, ToolkitPath};
use toolkit_targets::{TargetDefinition, TargetRegistry};

use super::ContentSource;
use crate::{Error, Result};

fn default_enabled() -> bool {
    true
}

/// Per-destination entry under `editors:`.
///
/// Either a bare flag (`cursor: true`) or a table with feature flags
/// (`claude: { enabled: true, frontmatter: false }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditorSetting {
    Enabled(bool),
    Detailed {
        #[serde(default = "default_enabled")]
        enabled: bool,
        /// `Some(false)` strips skill frontmatter for this destination
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frontmatter: Option<bool>,
    },
}

impl EditorSetting {
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(enabled) | Self::Detailed { enabled, .. } => *enabled,
        }
    }

    pub fn frontmatter(&self) -> Option<bool> {
        match self {
            Self::Enabled(_) => None,
            Self::Detailed { frontmatter, .. } => *frontmatter,
        }
    }
}

/// Project configuration consumed by the sync engine.
///
/// Keys owned by other tooling (metadata, mcp servers, settings) are
/// ignored when parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Destination ids to their settings; absent means every built-in target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editors: Option<BTreeMap<String, EditorSetting>>,

    /// External roots, in precedence order (later sources shadow earlier ones)
    #[serde(default)]
    pub content_sources: Vec<ContentSource>,
}

impl ToolkitConfig {
    /// Parse configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use toolkit_core::ToolkitConfig;
    ///
    /// let config = ToolkitConfig::parse("editors:\n  cursor: true\n").unwrap();
    /// assert!(config.editors.unwrap()["cursor"].is_enabled());
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Locate and load the configuration file in `root`.
    ///
    /// `ai-toolkit.yaml` is preferred over `ai-toolkit.yml`.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let path = Self::find(root).ok_or_else(|| Error::ConfigNotFound {
            path: root.join(ToolkitPath::ConfigFile.as_str()).to_native(),
        })?;
        tracing::debug!(path = %path, "Loading configuration");
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Path of the configuration file in `root`, if there is one.
    pub fn find(root: &NormalizedPath) -> Option<NormalizedPath> {
        ToolkitPath::config_files()
            .into_iter()
            .map(|name| root.join(name.as_str()))
            .find(|path| path.is_file())
    }

    /// Resolve the destinations to fan out to.
    ///
    /// Unknown ids are logged and skipped. Per-destination flags are
    /// applied to the returned definitions.
    pub fn enabled_targets(&self, registry: &TargetRegistry) -> Vec<TargetDefinition> {
        let Some(editors) = &self.editors else {
            return registry.all().into_iter().cloned().collect();
        };

        let mut targets = Vec::new();
        for (id, setting) in editors {
            if !setting.is_enabled() {
                continue;
            }
            let Some(definition) = registry.get(id) else {
                tracing::warn!(editor = %id, "Unknown editor in configuration, skipping");
                continue;
            };
            let mut definition = definition.clone();
            if setting.frontmatter() == Some(false) {
                definition = definition.without_frontmatter();
            }
            targets.push(definition);
        }
        targets
    }

    /// Sources of kind `local`, in configured order.
    pub fn local_sources(&self) -> Vec<&ContentSource> {
        self.content_sources.iter().filter(|s| s.is_local()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toolkit_targets::{BUILTIN_COUNT, Category};

    #[test]
    fn test_empty_config() {
        let config = ToolkitConfig::parse("").unwrap();
        assert_eq!(config, ToolkitConfig::default());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = ToolkitConfig::parse(
            "version: \"1.0\"\nmetadata:\n  name: demo\nmcp_servers: {}\neditors:\n  cursor: true\n",
        )
        .unwrap();
        assert_eq!(config.version.as_deref(), Some("1.0"));
        assert_eq!(config.editors.unwrap().len(), 1);
    }

    #[test]
    fn test_editor_setting_forms() {
        let config = ToolkitConfig::parse(
            "editors:\n  cursor: true\n  windsurf: false\n  claude: { enabled: true, frontmatter: false }\n  kiro: {}\n",
        )
        .unwrap();
        let editors = config.editors.unwrap();

        assert_eq!(editors["cursor"], EditorSetting::Enabled(true));
        assert!(!editors["windsurf"].is_enabled());
        assert_eq!(editors["claude"].frontmatter(), Some(false));
        assert!(editors["kiro"].is_enabled());
    }

    #[test]
    fn test_absent_editors_enables_all_builtins() {
        let registry = TargetRegistry::with_builtins();
        let targets = ToolkitConfig::default().enabled_targets(&registry);
        assert_eq!(targets.len(), BUILTIN_COUNT);
    }

    #[test]
    fn test_enabled_targets_filters_and_applies_flags() {
        let registry = TargetRegistry::with_builtins();
        let config = ToolkitConfig::parse(
            "editors:\n  claude: { frontmatter: false }\n  cursor: false\n  nonexistent: true\n",
        )
        .unwrap();

        let targets = config.enabled_targets(&registry);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, "claude");
        assert!(!targets[0].supports_frontmatter());
    }

    #[test]
    fn test_local_sources() {
        let config = ToolkitConfig::parse(
            "content_sources:\n  - type: package\n    name: kit\n  - type: local\n    path: ../shared\n    include: [rules]\n",
        )
        .unwrap();

        let locals = config.local_sources();
        assert_eq!(locals.len(), 1);
        assert_eq!(locals[0].categories(), vec![Category::Rules]);
    }
}
