//! Search box editing (pure state transitions).
//!
//! The search text itself lives in `FilterState`; this module only computes
//! the next (text, cursor) pair for an edit. The caller dispatches the new
//! text as `Action::SetSearch`, so the table refilters on every keystroke.
//! Cursor positions count characters, not bytes.

/// Search text being edited plus the cursor position (in chars).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEdit {
    /// Current text.
    pub text: String,
    /// Cursor position, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl SearchEdit {
    /// Start editing `text` with the cursor at the end.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(mut edit: SearchEdit, ch: char) -> SearchEdit {
    let cursor = edit.cursor.min(edit.char_len());
    let offset = edit.byte_offset(cursor);
    edit.text.insert(offset, ch);
    edit.cursor = cursor + 1;
    edit
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut edit: SearchEdit) -> SearchEdit {
    let cursor = edit.cursor.min(edit.char_len());
    if cursor == 0 {
        return edit;
    }
    let offset = edit.byte_offset(cursor - 1);
    edit.text.remove(offset);
    edit.cursor = cursor - 1;
    edit
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut edit: SearchEdit) -> SearchEdit {
    let cursor = edit.cursor.min(edit.char_len());
    if cursor == edit.char_len() {
        return edit;
    }
    let offset = edit.byte_offset(cursor);
    edit.text.remove(offset);
    edit.cursor = cursor;
    edit
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = edit.cursor.saturating_sub(1);
    edit
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(mut edit: SearchEdit) -> SearchEdit {
    edit.cursor = (edit.cursor + 1).min(edit.char_len());
    edit
}

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
