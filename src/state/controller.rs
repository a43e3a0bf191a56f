//! Interaction state controller (pure reducer).
//!
//! Every user gesture the renderer can produce maps to one [`Action`].
//! [`reduce`] turns the current [`ViewState`] and an action into the next
//! state. Each action is a single state replacement, so a renderer never
//! observes a half-applied reset.

use super::filter_state::FilterState;
use super::sort_state::SortState;
use crate::model::{CategoryId, SortKey, UserId};
use tracing::debug;

// ===== Action =====

/// Gestures exposed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select an owner tab, or `None` for "All".
    SelectOwner(Option<UserId>),
    /// Replace the search text verbatim.
    SetSearch(String),
    /// Clear the search text (the search box's clear button).
    ClearSearch,
    /// Add the category if absent, remove it if present.
    ToggleCategory(CategoryId),
    /// Clear the category selection ("All" chip).
    SelectAllCategories,
    /// Advance the tri-state sort cycle for a column.
    ToggleSort(SortKey),
    /// Clear owner, search, categories and sort in one step.
    ResetAll,
}

// ===== ViewState =====

/// Everything the derived view depends on besides the catalog itself.
///
/// `Default` is the canonical reset state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Filter selections.
    pub filter: FilterState,
    /// Sort selection.
    pub sort: SortState,
}

impl ViewState {
    /// Shorthand for `ViewState::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

// ===== Reducer =====

/// Apply one action. Pure: the result depends only on the arguments.
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    debug!(?action, "applying action");

    match action {
        Action::SelectOwner(owner) => state.filter.set_owner(owner),
        Action::SetSearch(text) => state.filter.set_search(text),
        Action::ClearSearch => state.filter.set_search(String::new()),
        Action::ToggleCategory(category) => state.filter.toggle_category(category),
        Action::SelectAllCategories => state.filter.clear_categories(),
        Action::ToggleSort(key) => state.sort = state.sort.toggle(key),
        Action::ResetAll => return ViewState::default(),
    }

    state
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
