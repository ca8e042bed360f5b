//! Documents and the category-partitioned store that reads them

mod document;
mod store;

pub use document::{Document, LOCAL_ORIGIN, MANAGED_MARKER};
pub use store::{DocumentStore, walk_markdown};

use toolkit_targets::Category;

/// One value per content category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorized<T> {
    pub rules: T,
    pub skills: T,
    pub workflows: T,
}

impl<T> Categorized<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Rules => &self.rules,
            Category::Skills => &self.skills,
            Category::Workflows => &self.workflows,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Rules => &mut self.rules,
            Category::Skills => &mut self.skills,
            Category::Workflows => &mut self.workflows,
        }
    }

    /// Pairs in category processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Categorized<Vec<Document>> {
    pub fn total(&self) -> usize {
        self.rules.len() + self.skills.len() + self.workflows.len()
    }
}
