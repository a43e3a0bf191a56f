//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::catalog::join;
use crate::model::AppError;
use crate::source::{parse_catalog, CatalogSource};
use crate::state::AppState;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load the embedded catalog with a 100x30 terminal.
    pub(crate) fn embedded() -> Result<Self, AppError> {
        Self::embedded_with_size(100, 30)
    }

    /// Load the embedded catalog with a custom terminal size.
    pub(crate) fn embedded_with_size(width: u16, height: u16) -> Result<Self, AppError> {
        let raw = CatalogSource::Embedded.load()?;
        Self::from_state(AppState::new(join(raw)?), width, height)
    }

    /// Load a catalog from JSON text.
    pub(crate) fn from_json(text: &str, width: u16, height: u16) -> Result<Self, AppError> {
        let raw = parse_catalog(text, "<test>")?;
        Self::from_state(AppState::new(join(raw)?), width, height)
    }

    fn from_state(app_state: AppState, width: u16, height: u16) -> Result<Self, AppError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            app: TuiApp::new_for_test(terminal, app_state),
            running: true,
        })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub(crate) fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub(crate) fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if one of them quits.
    pub(crate) fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub(crate) fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub(crate) fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Names in the product column, top to bottom.
    pub(crate) fn visible_names(&self) -> Vec<String> {
        self.state()
            .derived()
            .rows()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Render the current state and return the screen as text.
    pub(crate) fn render_to_string(&mut self) -> String {
        if let Err(e) = self.app.render_test() {
            panic!("render failed: {e}");
        }
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
