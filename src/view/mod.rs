//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod filter_panel;
mod help;
mod layout;
mod product_table;
mod search_input;
mod styles;
pub mod tabs;

pub use filter_panel::{chip_label, chip_line};
pub use help::{key_label, render_help_overlay};
pub use layout::{calculate_areas, render_layout, status_text, ScreenAreas};
pub use product_table::{category_cell, column_widths, header_label, sort_glyph};
pub use search_input::SearchInput;
pub use styles::{CatalogStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{search_input_handler, Action, AppState, Focus};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: CatalogStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: CatalogStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on terminal events;
    /// each key press is one state update followed by one redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a key event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a search
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // While typing, keys edit the search text instead of triggering bindings
        if self.app_state.focus == Focus::Search {
            self.handle_search_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };

        // Help overlay swallows everything except closing it and quitting
        if self.app_state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        self.apply_key_action(action)
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => state.finish_search(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.search_input(ch)
            }
            KeyCode::Backspace => state.edit_search(search_input_handler::handle_backspace),
            KeyCode::Delete => state.edit_search(search_input_handler::handle_delete),
            KeyCode::Left => state.edit_search(search_input_handler::handle_cursor_left),
            KeyCode::Right => state.edit_search(search_input_handler::handle_cursor_right),
            _ => {}
        }
    }

    /// Route a bound action to the state. Returns true on quit.
    fn apply_key_action(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::RowDown => state.select_next_row(),
            KeyAction::RowUp => state.select_prev_row(),
            KeyAction::RowTop => state.select_first_row(),
            KeyAction::RowBottom => state.select_last_row(),
            KeyAction::NextOwner => state.next_owner(),
            KeyAction::PrevOwner => state.prev_owner(),
            KeyAction::AllOwners => state.dispatch(Action::SelectOwner(None)),
            KeyAction::StartSearch => state.start_search(),
            KeyAction::ClearSearch => state.clear_search(),
            KeyAction::NextCategory => state.next_category(),
            KeyAction::PrevCategory => state.prev_category(),
            KeyAction::ToggleCategory => state.toggle_category_at_cursor(),
            KeyAction::AllCategories => state.dispatch(Action::SelectAllCategories),
            KeyAction::ToggleSort(column) => state.dispatch(Action::ToggleSort(column)),
            KeyAction::ResetAll => state.reset_all(),
            KeyAction::Help => state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let bindings = &self.key_bindings;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, bindings, styles))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: CatalogStyles::default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a frame to the backend (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to the terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, styles: CatalogStyles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
