//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod controller;
pub mod filter_state;
pub mod search_input_handler;
pub mod sort_state;

// Re-export for convenience
pub use app_state::{AppState, Focus};
pub use controller::{reduce, Action, ViewState};
pub use filter_state::FilterState;
pub use search_input_handler::SearchEdit;
pub use sort_state::{SortDirection, SortIndicator, SortState};
