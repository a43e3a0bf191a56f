//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the owner tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the category chip row in lines (border + chips).
pub const CHIP_ROW_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for key hints and the match count.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Title shown in the title bar.
pub const APP_TITLE: &str = "Product Categories";

/// Shown in place of the table when the filters match nothing.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";
