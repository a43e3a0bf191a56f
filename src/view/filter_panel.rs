//! Category chip row.

use super::styles::CatalogStyles;
use crate::model::Category;
use crate::state::FilterState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the chip that clears the category selection.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Chip text for a category: icon, space, title.
pub fn chip_label(category: &Category) -> String {
    format!("{} {}", category.icon, category.title)
}

/// Build the chip spans: "All" first, then one chip per category.
///
/// "All" is highlighted when nothing is selected; each selected category
/// chip is highlighted; the chip at `cursor` is patched with the cursor
/// style on top.
pub fn chip_line(
    categories: &[Category],
    filter: &FilterState,
    cursor: usize,
    styles: &CatalogStyles,
) -> Line<'static> {
    let all_style = if filter.all_categories_selected() {
        styles.active
    } else {
        styles.muted
    };
    let mut spans = vec![Span::styled(format!(" {ALL_CATEGORIES_LABEL} "), all_style)];

    for (index, category) in categories.iter().enumerate() {
        let mut style = if filter.is_category_selected(category.id) {
            styles.active
        } else {
            ratatui::style::Style::default()
        };
        if index == cursor {
            style = style.patch(styles.cursor);
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", chip_label(category)), style));
    }

    Line::from(spans)
}

/// Render the category chip row.
pub fn render_category_chips(
    frame: &mut Frame,
    area: Rect,
    categories: &[Category],
    filter: &FilterState,
    cursor: usize,
    styles: &CatalogStyles,
) {
    let paragraph = Paragraph::new(chip_line(categories, filter, cursor, styles)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles.muted)
            .title("Categories"),
    );
    frame.render_widget(paragraph, area);
}
