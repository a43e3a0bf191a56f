//! Screen layout rendering.
//!
//! Stacks the widgets top to bottom: title, owner tabs, search box,
//! category chips, product table, status bar. The help overlay is drawn
//! last, on top of everything.

use super::constants::{
    APP_TITLE, CHIP_ROW_HEIGHT, SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
    TITLE_BAR_HEIGHT,
};
use super::filter_panel::render_category_chips;
use super::help::render_help_overlay;
use super::product_table::render_product_table;
use super::search_input::SearchInput;
use super::styles::CatalogStyles;
use super::tabs::render_owner_tabs;
use crate::catalog::DerivedView;
use crate::config::KeyBindings;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar.
    pub title: Rect,
    /// Owner tabs.
    pub tabs: Rect,
    /// Search box.
    pub search: Rect,
    /// Category chips.
    pub chips: Rect,
    /// Product table or empty-result message.
    pub table: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into the screen regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(CHIP_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        tabs: chunks[1],
        search: chunks[2],
        chips: chunks[3],
        table: chunks[4],
        status: chunks[5],
    }
}

/// Render the whole screen for `state`.
///
/// Derives the rows once per frame; both the table and the status bar read
/// the same derivation.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    bindings: &KeyBindings,
    styles: &CatalogStyles,
) {
    let areas = calculate_areas(frame.area());
    let catalog = state.catalog();
    let view_state = state.view();
    let derived = state.derived();

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(APP_TITLE, styles.title))),
        areas.title,
    );

    render_owner_tabs(
        frame,
        areas.tabs,
        catalog.users(),
        state.owner_tab_index(),
        styles,
    );

    frame.render_widget(
        SearchInput::new(
            view_state.filter.search(),
            state.search_cursor,
            state.focus == Focus::Search,
            styles,
        ),
        areas.search,
    );

    render_category_chips(
        frame,
        areas.chips,
        catalog.categories(),
        &view_state.filter,
        state.category_cursor,
        styles,
    );

    render_product_table(
        frame,
        areas.table,
        &derived,
        view_state.sort,
        state.selected_row,
        styles,
    );

    render_status_bar(frame, areas.status, state, &derived, styles);

    if state.help_visible {
        render_help_overlay(frame, bindings, styles);
    }
}

/// Status line text: match count and the hints for the current focus.
pub fn status_text(state: &AppState, derived: &DerivedView<'_>) -> String {
    let total = state.catalog().products().len();
    let count = format!("{} of {} products", derived.len(), total);
    let hints = match state.focus {
        Focus::Search => "Enter/Esc: done  ←/→: move  Backspace: delete",
        Focus::Table => "/: search  u: owner  c/Space: category  1-4: sort  r: reset  ?: help  q: quit",
    };
    format!(" {count} | {hints}")
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    derived: &DerivedView<'_>,
    styles: &CatalogStyles,
) {
    let status = Paragraph::new(Line::from(Span::styled(
        status_text(state, derived),
        styles.muted,
    )));
    frame.render_widget(status, area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
