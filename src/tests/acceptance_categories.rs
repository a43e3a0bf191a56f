//! Acceptance tests: category chip selection.
//!
//! Chip order follows the catalog: Grocery, Drinks, Fruits, Electronics,
//! Clothes. The chip cursor starts on Grocery.

use crate::model::CategoryId;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn space_selects_category_under_cursor() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");

    // Move to Fruits and select it
    harness.send_keys(&[KeyCode::Char('c'), KeyCode::Char('c'), KeyCode::Char(' ')]);

    assert!(harness
        .state()
        .view()
        .filter
        .is_category_selected(CategoryId::new(3)));
    assert_eq!(harness.visible_names(), ["Apple", "Banana"]);
}

#[test]
fn selected_categories_are_a_union() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");

    // Drinks, then Clothes
    harness.send_keys(&[KeyCode::Right, KeyCode::Enter]);
    harness.send_keys(&[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Enter]);

    assert_eq!(harness.visible_names(), ["Milk", "Jacket", "Beer", "Jeans"]);
}

#[test]
fn toggling_twice_deselects() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");

    harness.send_keys(&[KeyCode::Char(' '), KeyCode::Char(' ')]);

    assert!(harness.state().view().filter.all_categories_selected());
    assert_eq!(harness.visible_names().len(), 12);
}

#[test]
fn a_selects_all_categories() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");
    harness.send_keys(&[KeyCode::Char(' '), KeyCode::Char('c'), KeyCode::Char(' ')]);
    assert_eq!(harness.visible_names().len(), 6);

    harness.send_key(KeyCode::Char('a'));

    assert!(harness.state().view().filter.all_categories_selected());
    assert_eq!(harness.visible_names().len(), 12);
}

#[test]
fn cursor_wraps_left_from_first_chip() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");

    harness.send_key(KeyCode::Left);

    assert_eq!(harness.state().category_at_cursor(), Some(CategoryId::new(5)));
}

#[test]
fn categories_combine_with_owner_and_search() {
    let mut harness = AcceptanceTestHarness::embedded().expect("embedded catalog should load");

    // Owner Anna, categories Grocery, search "r"
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Char(' ')]);
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("r");
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.visible_names(), ["Bread", "Sugar", "Carrot"]);
}
