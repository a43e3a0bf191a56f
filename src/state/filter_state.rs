//! Filter selections: owner, search text, categories.

use crate::model::{CategoryId, UserId};
use std::collections::BTreeSet;

/// The three independent filter selections.
///
/// `Default` is the canonical "show everything" state: no owner, empty
/// search text, no categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    owner: Option<UserId>,
    search: String,
    categories: BTreeSet<CategoryId>,
}

impl FilterState {
    /// Same as `FilterState::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: restrict to one owner (`None` = all users).
    pub fn with_owner(mut self, owner: Option<UserId>) -> Self {
        self.owner = owner;
        self
    }

    /// Builder: set the search text verbatim.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder: replace the selected category set.
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryId>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Selected owner, `None` meaning all users.
    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// Search text exactly as entered.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected categories. Empty means all categories.
    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    /// Whether `owner` is the active owner tab (`None` asks about "All").
    pub fn is_owner_selected(&self, owner: Option<UserId>) -> bool {
        self.owner == owner
    }

    /// Whether `category` is in the selected set.
    pub fn is_category_selected(&self, category: CategoryId) -> bool {
        self.categories.contains(&category)
    }

    /// Whether the "All" category chip is active.
    pub fn all_categories_selected(&self) -> bool {
        self.categories.is_empty()
    }

    /// True when no filter narrows the result.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn set_owner(&mut self, owner: Option<UserId>) {
        self.owner = owner;
    }

    pub(crate) fn set_search(&mut self, search: String) {
        self.search = search;
    }

    /// Add if absent, remove if present.
    pub(crate) fn toggle_category(&mut self, category: CategoryId) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub(crate) fn clear_categories(&mut self) {
        self.categories.clear();
    }
}
