//! Tests for the screen layout.

use super::*;
use crate::catalog::test_support::two_fruits;
use crate::state::Action;
use crate::test_harness::buffer_to_string;
use crate::view::constants::NO_MATCHES_MESSAGE;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let bindings = KeyBindings::default();
    terminal
        .draw(|frame| render_layout(frame, state, &bindings, &CatalogStyles::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn calculate_areas_stacks_fixed_rows_around_table() {
    let areas = calculate_areas(Rect::new(0, 0, 80, 30));

    assert_eq!(areas.title.height, TITLE_BAR_HEIGHT);
    assert_eq!(areas.tabs.y, 1);
    assert_eq!(areas.search.y, 4);
    assert_eq!(areas.chips.y, 7);
    assert_eq!(areas.table.y, 10);
    assert_eq!(areas.table.height, 30 - 10 - STATUS_BAR_HEIGHT);
    assert_eq!(areas.status.y, 29);
}

#[test]
fn render_shows_every_region() {
    let state = AppState::new(two_fruits());
    let text = render(&state, 100, 20);

    assert!(text.contains("Product Categories"));
    assert!(text.contains("Owner"));
    assert!(text.contains("Search"));
    assert!(text.contains("Categories"));
    assert!(text.contains("Apple"));
    assert!(text.contains("2 of 2 products"));
}

#[test]
fn render_no_matches_shows_message_and_zero_count() {
    let mut state = AppState::new(two_fruits());
    state.dispatch(Action::SetSearch("zzz".into()));
    let text = render(&state, 100, 20);

    assert!(text.contains(NO_MATCHES_MESSAGE));
    assert!(text.contains("0 of 2 products"));
}

#[test]
fn render_help_overlay_when_visible() {
    let mut state = AppState::new(two_fruits());
    state.toggle_help();
    let text = render(&state, 100, 40);
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn status_text_switches_hints_with_focus() {
    let mut state = AppState::new(two_fruits());
    let derived_text = |state: &AppState| status_text(state, &state.derived());

    assert!(derived_text(&state).contains("/: search"));
    state.start_search();
    assert!(derived_text(&state).contains("Enter/Esc: done"));
}

#[test]
fn render_survives_tiny_terminal() {
    let state = AppState::new(two_fruits());
    let text = render(&state, 5, 3);
    assert!(!text.is_empty());
}
