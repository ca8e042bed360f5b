//! Target registry storage

use super::TargetDefinition;
use crate::{Error, Result};
use std::collections::HashMap;

/// Central registry for target definitions, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: HashMap<String, TargetDefinition>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with all built-in targets.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for target in super::builtins::builtin_targets() {
            registry.register(target);
        }
        registry
    }

    /// Register a target, replacing any previous one with the same id.
    pub fn register(&mut self, target: TargetDefinition) {
        self.targets.insert(target.id.clone(), target);
    }

    pub fn get(&self, id: &str) -> Option<&TargetDefinition> {
        self.targets.get(id)
    }

    /// Like [`get`](Self::get) but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&TargetDefinition> {
        self.get(id).ok_or_else(|| Error::UnknownTarget { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// List all registered target ids (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.targets.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }

    /// All definitions sorted by id.
    pub fn all(&self) -> Vec<&TargetDefinition> {
        let mut targets: Vec<_> = self.targets.values().collect();
        targets.sort_by(|a, b| a.id.cmp(&b.id));
        targets
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetDefinition> {
        self.targets.values()
    }
}
