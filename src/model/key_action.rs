//! Domain-level keyboard actions independent of key bindings.

use super::column::SortKey;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row selection
    /// Move the highlighted row down. Default: j/↓
    RowDown,
    /// Move the highlighted row up. Default: k/↑
    RowUp,
    /// Jump to the first row. Default: g/Home
    RowTop,
    /// Jump to the last row. Default: G/End
    RowBottom,

    // Owner filter
    /// Select the next owner tab (All → first user → ...). Default: u/Tab
    NextOwner,
    /// Select the previous owner tab. Default: U/Shift+Tab
    PrevOwner,
    /// Show products of all owners. Default: 0
    AllOwners,

    // Search
    /// Focus the search box for typing. Default: / or Ctrl+f
    StartSearch,
    /// Clear the search text. Default: x
    ClearSearch,

    // Category filter
    /// Move the category cursor right. Default: c/l/→
    NextCategory,
    /// Move the category cursor left. Default: C/h/←
    PrevCategory,
    /// Toggle the category under the cursor. Default: Space/Enter
    ToggleCategory,
    /// Clear the category selection. Default: a
    AllCategories,

    // Sorting
    /// Cycle sorting on a column: asc → desc → none. Default: 1-4
    ToggleSort(SortKey),

    // Application
    /// Clear every filter and the sort. Default: r
    ResetAll,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
