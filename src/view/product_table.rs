//! Product table widget.
//!
//! Four columns (ID, Product, Category, User) with a sort glyph in each
//! header. When the filters match nothing the table is replaced by a
//! centred message.

use super::constants::NO_MATCHES_MESSAGE;
use super::styles::CatalogStyles;
use crate::catalog::{sort_indicator, DerivedView};
use crate::model::{EnrichedProduct, SortKey};
use crate::state::{SortIndicator, SortState};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Header glyph for a column's sort indicator.
pub fn sort_glyph(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::Unsorted => "↕",
        SortIndicator::Ascending => "▲",
        SortIndicator::Descending => "▼",
    }
}

/// Header text for `column`: label, space, glyph.
pub fn header_label(column: SortKey, sort: SortState) -> String {
    format!("{} {}", column.label(), sort_glyph(sort_indicator(&sort, column)))
}

/// Cell text for the category column: "icon - title".
pub fn category_cell(product: &EnrichedProduct) -> String {
    format!("{} - {}", product.category().icon, product.category().title)
}

fn cell_texts(product: &EnrichedProduct) -> [String; 4] {
    [
        product.id().to_string(),
        product.name().to_string(),
        category_cell(product),
        product.user().name.clone(),
    ]
}

/// Column widths in terminal cells: the widest of header and cells.
///
/// Display width, not char count, so emoji icons take two cells.
pub fn column_widths(rows: &[&EnrichedProduct], sort: SortState) -> [u16; 4] {
    let mut widths = SortKey::ALL.map(|column| header_label(column, sort).width());
    for row in rows {
        for (width, text) in widths.iter_mut().zip(cell_texts(row)) {
            *width = (*width).max(text.width());
        }
    }
    widths.map(|w| u16::try_from(w).unwrap_or(u16::MAX))
}

/// Render the table, or the empty-result message.
pub fn render_product_table(
    frame: &mut Frame,
    area: Rect,
    view: &DerivedView<'_>,
    sort: SortState,
    selected_row: Option<usize>,
    styles: &CatalogStyles,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.muted)
        .title("Products");

    if view.is_empty() {
        let message = Paragraph::new(Line::from(Span::styled(NO_MATCHES_MESSAGE, styles.muted)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let rows = view.rows();
    let header = Row::new(SortKey::ALL.map(|column| Cell::from(header_label(column, sort))))
        .style(styles.header);

    let body = rows.iter().map(|product| {
        let [id, name, category, user] = cell_texts(product);
        Row::new([
            Cell::from(id),
            Cell::from(name),
            Cell::from(category),
            Cell::from(Span::styled(user, styles.user_style(product.user().sex))),
        ])
    });

    let widths = column_widths(rows, sort).map(Constraint::Length);
    let table = Table::new(body, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(styles.row_highlight);

    let mut table_state = TableState::default().with_selected(selected_row);
    frame.render_stateful_widget(table, area, &mut table_state);
}
