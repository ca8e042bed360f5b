//! SyncEngine implementation
//!
//! The SyncEngine runs one pass over a project: resolve, write, detect
//! orphans, promote, reconcile. It keeps no state between passes; every
//! run recomputes from disk.

use toolkit_fs::{NormalizedPath, ToolkitPath};
use toolkit_targets::{Category, TargetDefinition, TargetRegistry};

use super::fanout::FanOutWriter;
use super::orphans::detect_orphans;
use super::promote::AutoPromoter;
use super::report::SyncRunResult;
use super::ssot::SsotReconciler;
use super::writeback::remove_orphan;
use crate::Result;
use crate::config::{ContentSource, ToolkitConfig};
use crate::sources::ContentResolver;

/// Options for a sync pass
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, nothing is written, removed or promoted.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
    /// Remove orphan candidates immediately instead of leaving them pending.
    /// Ignored in dry-run mode.
    pub prune_orphans: bool,
}

/// Orchestrates a synchronization pass for one project.
pub struct SyncEngine {
    root: NormalizedPath,
    config: ToolkitConfig,
    registry: TargetRegistry,
}

impl SyncEngine {
    /// Create an engine for the project at `root`.
    ///
    /// The root is canonicalised so that paths written and paths scanned
    /// share one spelling even when `root` goes through a symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist.
    pub fn new(root: NormalizedPath, config: ToolkitConfig) -> Result<Self> {
        Ok(Self {
            root: root.canonicalize()?,
            config,
            registry: TargetRegistry::with_builtins(),
        })
    }

    /// Create an engine from the configuration file found in `root`.
    pub fn load(root: NormalizedPath) -> Result<Self> {
        let root = root.canonicalize()?;
        let config = ToolkitConfig::load(&root)?;
        Self::new(root, config)
    }

    /// Replace the destination catalogue.
    pub fn with_registry(mut self, registry: TargetRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// The project's own content root, `<root>/.ai-content`.
    pub fn content_root(&self) -> NormalizedPath {
        self.root.join(ToolkitPath::ContentDir.as_str())
    }

    /// Destinations enabled by the configuration.
    pub fn targets(&self) -> Vec<TargetDefinition> {
        self.config.enabled_targets(&self.registry)
    }

    /// The shared root and the categories it covers, when exactly one
    /// `type: local` source is configured and it resolves.
    pub fn shared_root(&self) -> Option<(NormalizedPath, Vec<Category>)> {
        self.select_shared_root(&mut Vec::new())
    }

    fn select_shared_root(&self, warnings: &mut Vec<String>) -> Option<(NormalizedPath, Vec<Category>)> {
        let source: &ContentSource = match self.config.local_sources().as_slice() {
            [] => return None,
            [single] => *single,
            many => {
                warnings.push(format!(
                    "{} local content sources configured; shared root reconciliation needs exactly one",
                    many.len()
                ));
                return None;
            }
        };

        let root = ContentResolver::new(self.root.clone()).resolve_root(source)?;
        let content_root = self.content_root();
        if root == content_root || content_root.canonicalize().is_ok_and(|c| c == root) {
            warnings.push(format!(
                "Shared root {} is the project's own content root; skipping reconciliation",
                source.label()
            ));
            return None;
        }
        Some((root, source.categories()))
    }

    /// Run one pass.
    ///
    /// Per-item failures end up in [`SyncRunResult::errors`]; `Err` is only
    /// returned when the local content root cannot be read at all.
    pub fn run(&self, options: &SyncOptions) -> Result<SyncRunResult> {
        let mut result = SyncRunResult::new(options.dry_run);
        let content_root = self.content_root();
        let targets = self.targets();
        tracing::debug!(
            root = %self.root,
            targets = targets.len(),
            dry_run = options.dry_run,
            "Starting sync"
        );

        // Resolve
        let documents = ContentResolver::new(self.root.clone()).resolve(
            &content_root,
            &self.config.content_sources,
            &mut result.warnings,
        )?;

        // Write; overrides first so they win over same-named rules
        let writer = FanOutWriter::new(self.root.clone(), options.dry_run);
        writer.write_overrides(&content_root, &targets, &mut result);
        writer.write_all(&documents, &targets, &mut result);

        // Orphans
        let orphans = detect_orphans(&self.root, &targets, &result.expected);
        if options.prune_orphans && !options.dry_run {
            for candidate in orphans {
                match remove_orphan(&candidate) {
                    Ok(()) => result.removed.push(candidate.absolute_path),
                    Err(e) => result.record_error(format!(
                        "Failed to remove {}: {e}",
                        candidate.relative_path
                    )),
                }
            }
        } else {
            result.pending_orphans = orphans;
        }

        // Promote, then reconcile
        let mut warnings = Vec::new();
        let shared = self.select_shared_root(&mut warnings);
        for warning in warnings {
            result.record_warning(warning);
        }
        if let Some((shared_root, categories)) = shared {
            if !options.dry_run
                && let Err(e) = AutoPromoter::new(content_root.clone(), shared_root.clone())
                    .promote_missing(&categories, &mut result)
            {
                result.record_error(format!("Auto-promotion failed: {e}"));
            }

            if let Err(e) =
                SsotReconciler::new(content_root, shared_root).reconcile(&categories, &mut result)
            {
                result.record_error(format!("Reconciliation failed: {e}"));
            }
        }

        tracing::debug!(
            written = result.written.len(),
            orphans = result.pending_orphans.len(),
            divergences = result.divergences.len(),
            errors = result.errors.len(),
            "Sync finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn project(config: &str, files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ai-toolkit.yaml"), config).unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_missing_config_is_error() {
        let dir = tempdir().unwrap();
        let err = SyncEngine::load(NormalizedPath::new(dir.path())).err().unwrap();
        assert!(matches!(err, crate::Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_no_shared_root_without_local_source() {
        let dir = project("content_sources:\n  - type: package\n    name: kit\n", &[]);
        let engine = SyncEngine::load(NormalizedPath::new(dir.path())).unwrap();
        assert!(engine.shared_root().is_none());
    }

    #[test]
    fn test_two_local_sources_skip_reconciliation_with_warning() {
        let dir = project(
            "editors:\n  cursor: true\ncontent_sources:\n  - type: local\n    path: a\n  - type: local\n    path: b\n",
            &[("a/rules/x.md", "x"), ("b/rules/y.md", "y")],
        );
        let engine = SyncEngine::load(NormalizedPath::new(dir.path())).unwrap();
        let result = engine.run(&SyncOptions::default()).unwrap();

        assert!(engine.shared_root().is_none());
        assert!(result.warnings.iter().any(|w| w.contains("exactly one")));
        assert!(result.shared_orphans.is_empty());
    }

    #[test]
    fn test_dry_run_writes_nothing_but_records_paths() {
        let dir = project("editors:\n  cursor: true\n", &[(".ai-content/rules/a.md", "X")]);
        let engine = SyncEngine::load(NormalizedPath::new(dir.path())).unwrap();

        let result = engine
            .run(&SyncOptions {
                dry_run: true,
                ..Default::default()
            })
            .unwrap();

        let expected = engine.root().join(".cursor/rules/a.md");
        assert_eq!(result.written.iter().collect::<Vec<_>>(), vec![&expected]);
        assert!(!expected.exists());
        assert_eq!(result.actions, vec![format!("[dry-run] Would write {expected}")]);
    }
}
