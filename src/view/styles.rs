//! Catalog styling configuration.
//!
//! Colours for tabs, chips, the table and owner names. Owner names are
//! coloured by sex: male blue, female red.

use crate::model::Sex;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Resolved by the config chain (`color` in the config file, `NO_COLOR`,
/// `--no-color`); the view only reads the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved `color` setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== CatalogStyles =====

/// Styles for every catalog widget.
///
/// With colours disabled only modifiers remain (bold, reversed), so focus
/// and selection are still visible on a monochrome terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStyles {
    /// Title bar.
    pub title: Style,
    /// Active owner tab and selected chips.
    pub active: Style,
    /// Chip under the category cursor.
    pub cursor: Style,
    /// Table header row.
    pub header: Style,
    /// Highlighted table row.
    pub row_highlight: Style,
    /// Hints, borders of unfocused widgets, the empty-result message.
    pub muted: Style,
    /// Border of the focused widget.
    pub focused_border: Style,
    male: Style,
    female: Style,
}

impl CatalogStyles {
    /// Create styles with specified color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                active: bold.fg(Color::Yellow),
                cursor: Style::default().add_modifier(Modifier::UNDERLINED),
                header: bold.fg(Color::White),
                row_highlight: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default().fg(Color::DarkGray),
                focused_border: Style::default().fg(Color::Cyan),
                male: Style::default().fg(Color::Blue),
                female: Style::default().fg(Color::Red),
            }
        } else {
            Self {
                title: bold,
                active: bold,
                cursor: Style::default().add_modifier(Modifier::UNDERLINED),
                header: bold,
                row_highlight: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default(),
                focused_border: bold,
                male: Style::default(),
                female: Style::default(),
            }
        }
    }

    /// Style for an owner's name.
    pub fn user_style(&self, sex: Sex) -> Style {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

impl Default for CatalogStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
