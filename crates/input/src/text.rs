//! Line entry for the guessing games.

use arrayvec::ArrayString;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest name the creature game accepts as input.
pub const MAX_ENTRY_LEN: usize = 20;

/// Result of feeding one key to a [`TextEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    /// Buffer changed (or the key was ignored).
    Edited,
    /// Enter pressed; the buffer was taken and cleared.
    Submitted(String),
    /// Tab pressed; hosts may complete from suggestions.
    Complete,
    /// Key has no meaning for text entry.
    Unhandled,
}

/// Fixed-capacity input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    buf: ArrayString<MAX_ENTRY_LEN>,
    max_len: usize,
    letters_only: bool,
}

impl TextEntry {
    /// Letters only, up to `max_len` of them (word guesses).
    pub fn letters(max_len: usize) -> Self {
        Self {
            buf: ArrayString::new(),
            max_len: max_len.min(MAX_ENTRY_LEN),
            letters_only: true,
        }
    }

    /// Free-form ASCII names (creature guesses).
    pub fn names() -> Self {
        Self {
            buf: ArrayString::new(),
            max_len: MAX_ENTRY_LEN,
            letters_only: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Replace the contents, truncated to capacity.
    pub fn set(&mut self, text: &str) {
        self.buf.clear();
        for ch in text.chars() {
            self.push(ch);
        }
    }

    fn accepts(&self, ch: char) -> bool {
        if self.letters_only {
            ch.is_ascii_alphabetic()
        } else {
            ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '-' | '.' | '\'')
        }
    }

    fn push(&mut self, ch: char) {
        if self.buf.len() < self.max_len && self.accepts(ch) {
            let ch = if self.letters_only { ch.to_ascii_uppercase() } else { ch };
            let _ = self.buf.try_push(ch);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EntryEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return EntryEvent::Unhandled;
        }
        match key.code {
            KeyCode::Char(ch) if self.accepts(ch) => {
                self.push(ch);
                EntryEvent::Edited
            }
            KeyCode::Backspace => {
                self.buf.pop();
                EntryEvent::Edited
            }
            KeyCode::Enter => {
                let text = self.buf.to_string();
                self.buf.clear();
                EntryEvent::Submitted(text)
            }
            KeyCode::Tab => EntryEvent::Complete,
            _ => EntryEvent::Unhandled,
        }
    }
}
