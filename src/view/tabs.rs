//! Owner tab bar widget.
//!
//! Displays "All" followed by one tab per user using ratatui's Tabs widget.
//! Selection state is the owner filter in `ViewState`.

use super::styles::CatalogStyles;
use crate::model::User;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Label of the tab that clears the owner filter.
pub const ALL_OWNERS_LABEL: &str = "All";

/// Render the owner tab bar.
///
/// # Arguments
/// * `users` - Users in fixture order; tab `i + 1` is `users[i]`
/// * `selected_tab` - Index into `["All", users..]`; out of bounds falls back to "All"
///
/// User names keep their sex colour; the selected tab is additionally
/// highlighted.
pub fn render_owner_tabs(
    frame: &mut Frame,
    area: Rect,
    users: &[User],
    selected_tab: usize,
    styles: &CatalogStyles,
) {
    let titles: Vec<Line> = std::iter::once(Line::from(ALL_OWNERS_LABEL))
        .chain(
            users
                .iter()
                .map(|u| Line::from(Span::styled(u.name.as_str(), styles.user_style(u.sex)))),
        )
        .collect();

    let selected = if selected_tab <= users.len() {
        selected_tab
    } else {
        0
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.muted)
                .title("Owner"),
        )
        .highlight_style(styles.active)
        .select(selected);

    frame.render_widget(tabs, area);
}
