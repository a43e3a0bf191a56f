//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category. Keys are read from the active [`KeyBindings`], so the overlay
//! never drifts from what the keys actually do. Triggered by '?',
//! dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::CatalogStyles;
use crate::config::KeyBindings;
use crate::model::{KeyAction, SortKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups in display order.
const SECTIONS: &[(&str, &[(KeyAction, &str)])] = &[
    (
        "Rows",
        &[
            (KeyAction::RowDown, "Next row"),
            (KeyAction::RowUp, "Previous row"),
            (KeyAction::RowTop, "First row"),
            (KeyAction::RowBottom, "Last row"),
        ],
    ),
    (
        "Owner",
        &[
            (KeyAction::NextOwner, "Next owner"),
            (KeyAction::PrevOwner, "Previous owner"),
            (KeyAction::AllOwners, "All owners"),
        ],
    ),
    (
        "Search",
        &[
            (KeyAction::StartSearch, "Type a search (Enter/Esc to finish)"),
            (KeyAction::ClearSearch, "Clear search"),
        ],
    ),
    (
        "Categories",
        &[
            (KeyAction::NextCategory, "Next category"),
            (KeyAction::PrevCategory, "Previous category"),
            (KeyAction::ToggleCategory, "Toggle category"),
            (KeyAction::AllCategories, "All categories"),
        ],
    ),
    (
        "Sort (ascending, descending, off)",
        &[
            (KeyAction::ToggleSort(SortKey::Id), "Sort by ID"),
            (KeyAction::ToggleSort(SortKey::Name), "Sort by product"),
            (KeyAction::ToggleSort(SortKey::Category), "Sort by category"),
            (KeyAction::ToggleSort(SortKey::User), "Sort by user"),
        ],
    ),
    (
        "Application",
        &[
            (KeyAction::ResetAll, "Reset filters and sort"),
            (KeyAction::Help, "Toggle this help"),
            (KeyAction::Quit, "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, styles: &CatalogStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Human-readable key name, e.g. `j`, `↓`, `Space`, `Ctrl+c`.
pub fn key_label(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        other => format!("{other:?}"),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

/// Key column text for an action: every bound key, joined with `/`.
fn keys_text(bindings: &KeyBindings, action: KeyAction) -> String {
    let mut labels: Vec<String> = bindings.keys_for(action).into_iter().map(key_label).collect();
    labels.dedup();
    labels.join("/")
}

/// Build the help content lines grouped by category.
fn build_help_content(bindings: &KeyBindings, styles: &CatalogStyles) -> Vec<Line<'static>> {
    let key_style = Style::default().add_modifier(Modifier::BOLD).patch(styles.active);
    let mut lines = Vec::new();

    for (index, (title, entries)) in SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*title, styles.title)));
        for (action, description) in *entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", keys_text(bindings, *action)), key_style),
                Span::raw(*description),
            ]));
        }
    }

    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
