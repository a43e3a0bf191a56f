//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted while the table has
/// focus; typing into the search box bypasses this map.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether a shifted character carries
    /// `KeyModifiers::SHIFT`; character keys are matched with SHIFT
    /// stripped, so `G` resolves the same either way.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = match key.code {
            KeyCode::Char(_) => {
                KeyEvent::new(key.code, key.modifiers.difference(KeyModifiers::SHIFT))
            }
            _ => KeyEvent::new(key.code, key.modifiers),
        };
        self.bindings.get(&key).copied()
    }

    /// Every binding for `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|k| format!("{:?}", k.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;

        // Row selection
        bind(KeyCode::Char('j'), none, KeyAction::RowDown);
        bind(KeyCode::Down, none, KeyAction::RowDown);
        bind(KeyCode::Char('k'), none, KeyAction::RowUp);
        bind(KeyCode::Up, none, KeyAction::RowUp);
        bind(KeyCode::Char('g'), none, KeyAction::RowTop);
        bind(KeyCode::Home, none, KeyAction::RowTop);
        bind(KeyCode::Char('G'), none, KeyAction::RowBottom);
        bind(KeyCode::End, none, KeyAction::RowBottom);

        // Owner tabs
        bind(KeyCode::Char('u'), none, KeyAction::NextOwner);
        bind(KeyCode::Tab, none, KeyAction::NextOwner);
        bind(KeyCode::Char('U'), none, KeyAction::PrevOwner);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevOwner);
        bind(KeyCode::BackTab, none, KeyAction::PrevOwner);
        bind(KeyCode::Char('0'), none, KeyAction::AllOwners);

        // Search
        bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Char('x'), none, KeyAction::ClearSearch);

        // Category chips
        bind(KeyCode::Char('c'), none, KeyAction::NextCategory);
        bind(KeyCode::Char('l'), none, KeyAction::NextCategory);
        bind(KeyCode::Right, none, KeyAction::NextCategory);
        bind(KeyCode::Char('C'), none, KeyAction::PrevCategory);
        bind(KeyCode::Char('h'), none, KeyAction::PrevCategory);
        bind(KeyCode::Left, none, KeyAction::PrevCategory);
        bind(KeyCode::Char(' '), none, KeyAction::ToggleCategory);
        bind(KeyCode::Enter, none, KeyAction::ToggleCategory);
        bind(KeyCode::Char('a'), none, KeyAction::AllCategories);

        // Column sorting, in column order
        for (digit, key) in ('1'..='4').zip(SortKey::ALL) {
            bind(KeyCode::Char(digit), none, KeyAction::ToggleSort(key));
        }

        // Application controls
        bind(KeyCode::Char('r'), none, KeyAction::ResetAll);
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
