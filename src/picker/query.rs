//! Single-line text input with a caret
//!
//! Used for the filter query, the create query, and the rename buffer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key did to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text changed
    Changed,
    /// Handled, text unchanged (caret moves, no-op edits)
    Unchanged,
    /// Not an editing key
    Unhandled,
}

/// Editable text with a byte-offset caret on a char boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    caret: usize,
}

impl QueryInput {
    /// Empty input
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input seeded with `text`, caret at the end
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self { text, caret }
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret byte offset
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Whether the text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the caret
    pub fn push(&mut self, c: char) {
        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    /// Remove the character before the caret
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let prev = self.text[..self.caret]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.text.remove(prev);
        self.caret = prev;
        true
    }

    /// Remove the character under the caret
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.text.len() {
            return false;
        }
        self.text.remove(self.caret);
        true
    }

    /// Move the caret one character left
    pub fn left(&mut self) {
        if self.caret > 0 {
            self.caret = self.text[..self.caret]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the caret one character right
    pub fn right(&mut self) {
        if self.caret < self.text.len() {
            self.caret = self.text[self.caret..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.caret + i);
        }
    }

    /// Delete the word before the caret
    pub fn delete_word(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let trimmed = self.text[..self.caret].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.text.drain(start..self.caret);
        self.caret = start;
        true
    }

    /// Clear the text
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.caret = 0;
        true
    }

    /// Apply an editing key
    pub fn apply_key(&mut self, key: KeyEvent) -> EditResult {
        let changed = |did: bool| if did { EditResult::Changed } else { EditResult::Unchanged };

        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => changed(self.clear()),
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => changed(self.delete_word()),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.push(c);
                EditResult::Changed
            }
            (KeyCode::Backspace, _) => changed(self.backspace()),
            (KeyCode::Delete, _) => changed(self.delete()),
            (KeyCode::Left, _) => {
                self.left();
                EditResult::Unchanged
            }
            (KeyCode::Right, _) => {
                self.right();
                EditResult::Unchanged
            }
            (KeyCode::Home, _) => {
                self.caret = 0;
                EditResult::Unchanged
            }
            (KeyCode::End, _) => {
                self.caret = self.text.len();
                EditResult::Unchanged
            }
            _ => EditResult::Unhandled,
        }
    }
}
