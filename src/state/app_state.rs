//! Application state and transitions.
//!
//! AppState is the root state type for the TUI. It owns the joined catalog
//! and the reducer-managed [`ViewState`]; everything else here is UI-only
//! state (focus, cursors, help visibility) that never affects which rows
//! are derived.

use crate::catalog::{derive, filter, Catalog, DerivedView};
use crate::model::{CategoryId, UserId};
use crate::state::search_input_handler::{self, SearchEdit};
use crate::state::{reduce, Action, ViewState};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Filter and sort changes go through [`AppState::dispatch`], which runs the
/// reducer and then re-clamps the row selection against the new derived
/// view. UI fields are public the way the rest of the state layer exposes
/// them; the catalog and view state are read through accessors.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    view: ViewState,

    /// Rows in the current view. Depends only on the filter, so it is
    /// recounted when a filter changes and left alone on sort changes.
    visible_len: usize,

    /// Which widget receives keyboard input.
    pub focus: Focus,

    /// Search cursor position in chars. Only meaningful while
    /// `focus == Focus::Search`.
    pub search_cursor: usize,

    /// Highlighted category chip, `0..categories.len()`.
    pub category_cursor: usize,

    /// Highlighted table row. `None` when the view has no rows.
    pub selected_row: Option<usize>,

    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create state over `catalog` with the default view (everything shown,
    /// unsorted).
    pub fn new(catalog: Catalog) -> Self {
        Self::with_view(catalog, ViewState::default())
    }

    /// Create state over `catalog` starting from `view`.
    pub fn with_view(catalog: Catalog, view: ViewState) -> Self {
        let mut state = Self {
            catalog,
            view,
            visible_len: 0,
            focus: Focus::Table,
            search_cursor: 0,
            category_cursor: 0,
            selected_row: None,
            help_visible: false,
        };
        state.visible_len = state.count_visible();
        state.clamp_selection();
        state
    }

    /// The joined catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filter and sort state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Rows for the current view state.
    ///
    /// Runs the full filter and sort. The renderer calls this once per
    /// frame; state transitions only need [`AppState::visible_len`].
    pub fn derived(&self) -> DerivedView<'_> {
        derive(&self.catalog, &self.view)
    }

    /// Number of rows the current view shows.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// Run `action` through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        let reorders_only = matches!(action, Action::ToggleSort(_));
        let view = std::mem::take(&mut self.view);
        self.view = reduce(view, action);
        if !reorders_only {
            self.visible_len = self.count_visible();
        }
        self.clamp_selection();
    }

    /// Reset filters and sort, and put the UI back in its initial shape.
    pub fn reset_all(&mut self) {
        self.dispatch(Action::ResetAll);
        self.focus = Focus::Table;
        self.search_cursor = 0;
        self.category_cursor = 0;
        self.selected_row = (self.visible_len > 0).then_some(0);
    }

    // ===== Owner tabs =====

    /// Owner tabs in display order: "All" (`None`) then every user.
    pub fn owner_tabs(&self) -> Vec<Option<UserId>> {
        std::iter::once(None)
            .chain(self.catalog.users().iter().map(|u| Some(u.id)))
            .collect()
    }

    /// Index of the selected owner in [`AppState::owner_tabs`].
    ///
    /// Falls back to 0 ("All") if the selected owner is not a known user.
    pub fn owner_tab_index(&self) -> usize {
        self.owner_tabs()
            .iter()
            .position(|tab| self.view.filter.is_owner_selected(*tab))
            .unwrap_or(0)
    }

    /// Select the next owner tab, wrapping from the last user to "All".
    pub fn next_owner(&mut self) {
        self.cycle_owner(1);
    }

    /// Select the previous owner tab, wrapping from "All" to the last user.
    pub fn prev_owner(&mut self) {
        let len = self.owner_tabs().len();
        self.cycle_owner(len - 1);
    }

    fn cycle_owner(&mut self, step: usize) {
        let tabs = self.owner_tabs();
        let next = (self.owner_tab_index() + step) % tabs.len();
        self.dispatch(Action::SelectOwner(tabs[next]));
    }

    // ===== Category chips =====

    /// Category under the chip cursor, if there are any categories.
    pub fn category_at_cursor(&self) -> Option<CategoryId> {
        self.catalog
            .categories()
            .get(self.category_cursor)
            .map(|c| c.id)
    }

    /// Move the chip cursor right, wrapping.
    pub fn next_category(&mut self) {
        let len = self.catalog.categories().len();
        if len == 0 {
            return;
        }
        self.category_cursor = (self.category_cursor + 1) % len;
    }

    /// Move the chip cursor left, wrapping.
    pub fn prev_category(&mut self) {
        let len = self.catalog.categories().len();
        if len == 0 {
            return;
        }
        self.category_cursor = (self.category_cursor + len - 1) % len;
    }

    /// Toggle the chip under the cursor.
    pub fn toggle_category_at_cursor(&mut self) {
        if let Some(id) = self.category_at_cursor() {
            self.dispatch(Action::ToggleCategory(id));
        }
    }

    // ===== Search box =====

    /// Focus the search box with the cursor at the end of the text.
    pub fn start_search(&mut self) {
        self.focus = Focus::Search;
        self.search_cursor = SearchEdit::at_end(self.view.filter.search()).cursor;
    }

    /// Return focus to the table. The search text stays applied.
    pub fn finish_search(&mut self) {
        self.focus = Focus::Table;
    }

    /// Clear the search text.
    pub fn clear_search(&mut self) {
        self.dispatch(Action::ClearSearch);
        self.search_cursor = 0;
    }

    /// Apply an edit to the search text and refilter immediately.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchEdit) -> SearchEdit) {
        let current = SearchEdit {
            text: self.view.filter.search().to_string(),
            cursor: self.search_cursor,
        };
        let next = edit(current);
        self.search_cursor = next.cursor;
        if next.text != self.view.filter.search() {
            self.dispatch(Action::SetSearch(next.text));
        }
    }

    /// Insert a typed character into the search box.
    pub fn search_input(&mut self, ch: char) {
        self.edit_search(|e| search_input_handler::handle_char_input(e, ch));
    }

    // ===== Table rows =====

    /// Move the row highlight down one row.
    pub fn select_next_row(&mut self) {
        let len = self.visible_len;
        self.selected_row = match self.selected_row {
            _ if len == 0 => None,
            None => Some(0),
            Some(row) => Some((row + 1).min(len - 1)),
        };
    }

    /// Move the row highlight up one row.
    pub fn select_prev_row(&mut self) {
        let len = self.visible_len;
        self.selected_row = match self.selected_row {
            _ if len == 0 => None,
            None => Some(0),
            Some(row) => Some(row.saturating_sub(1)),
        };
    }

    /// Highlight the first row.
    pub fn select_first_row(&mut self) {
        self.selected_row = (self.visible_len > 0).then_some(0);
    }

    /// Highlight the last row.
    pub fn select_last_row(&mut self) {
        self.selected_row = self.visible_len.checked_sub(1);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    fn count_visible(&self) -> usize {
        filter(self.catalog.products(), &self.view.filter).count()
    }

    fn clamp_selection(&mut self) {
        self.selected_row = match self.visible_len {
            0 => None,
            len => Some(self.selected_row.unwrap_or(0).min(len - 1)),
        };
    }
}

// ===== Focus =====

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Table, tabs and chips respond to their key bindings.
    #[default]
    Table,
    /// Keystrokes edit the search text.
    Search,
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
