//! External content sources and the local-wins merge

mod resolver;

pub use resolver::ContentResolver;

use std::collections::{HashMap, HashSet};

use crate::content::{Categorized, Document};

/// Merge one category: external documents in source order, minus any
/// whose name a local document also uses, followed by every local document.
///
/// Remaining name clashes (between two external sources, or between two
/// nested local files with the same stem) keep the last occurrence.
pub fn merge_category(external: Vec<Document>, local: Vec<Document>) -> Vec<Document> {
    let local_names: HashSet<String> = local.iter().map(|d| d.name.clone()).collect();

    let mut merged: Vec<Document> = external
        .into_iter()
        .filter(|doc| {
            let shadowed = local_names.contains(&doc.name);
            if shadowed {
                tracing::debug!(
                    category = %doc.category,
                    name = %doc.name,
                    origin = %doc.origin,
                    "External document overridden by local copy"
                );
            }
            !shadowed
        })
        .collect();
    merged.extend(local);

    keep_last_by_name(merged)
}

/// Merge every category.
pub fn merge_all(
    external: Categorized<Vec<Document>>,
    local: Categorized<Vec<Document>>,
) -> Categorized<Vec<Document>> {
    Categorized {
        rules: merge_category(external.rules, local.rules),
        skills: merge_category(external.skills, local.skills),
        workflows: merge_category(external.workflows, local.workflows),
    }
}

fn keep_last_by_name(documents: Vec<Document>) -> Vec<Document> {
    let mut last: HashMap<&str, usize> = HashMap::new();
    for (index, doc) in documents.iter().enumerate() {
        if let Some(previous) = last.insert(doc.name.as_str(), index) {
            let earlier = &documents[previous];
            tracing::warn!(
                category = %doc.category,
                name = %doc.name,
                kept = %doc.source_path,
                dropped = %earlier.source_path,
                "Two documents share a name; keeping the later one"
            );
        }
    }
    let keep: HashSet<usize> = last.into_values().collect();

    documents
        .into_iter()
        .enumerate()
        .filter(|(index, _)| keep.contains(index))
        .map(|(_, doc)| doc)
        .collect()
}
