//! Search input widget for rendering the search bar.

use super::styles::CatalogStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hint shown in the border while there is text to clear.
pub const CLEAR_HINT: &str = "[x] clear";

/// Shown in an empty, unfocused search box.
pub const PLACEHOLDER: &str = "Search by product name ( / )";

/// Search input widget.
///
/// Always visible. Shows a block cursor while focused and the clear hint
/// whenever the text is non-empty.
pub struct SearchInput<'a> {
    text: &'a str,
    cursor: usize,
    focused: bool,
    styles: &'a CatalogStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget. `cursor` counts chars.
    pub fn new(text: &'a str, cursor: usize, focused: bool, styles: &'a CatalogStyles) -> Self {
        Self {
            text,
            cursor,
            focused,
            styles,
        }
    }

    fn content(&self) -> Line<'a> {
        if !self.focused {
            if self.text.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.styles.muted));
            }
            return Line::from(self.text);
        }

        // Split text into before/under/after cursor
        let cursor = self.cursor.min(self.text.chars().count());
        let before: String = self.text.chars().take(cursor).collect();
        let mut rest = self.text.chars().skip(cursor);
        let under = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.muted
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");
        if !self.text.is_empty() {
            block = block.title(Line::from(CLEAR_HINT).right_aligned());
        }

        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}
