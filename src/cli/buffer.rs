//! Input Buffer & Cursor Model
//!
//! Single-line text buffer with an explicit cursor offset. All edits
//! happen at the cursor, and the cursor is always kept inside
//! `[0, len]`. Stored as chars so cursor arithmetic is per code point
//! rather than per byte.

/// Editable line buffer with cursor management.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty buffer with the cursor at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the buffer contents as a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Current cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer contains no text.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert a character at the cursor and advance the cursor past it.
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Remove the character before the cursor. No-op at the start of
    /// the buffer. Returns whether a character was removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor > 0 {
            self.chars.remove(self.cursor - 1);
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Remove the character at the cursor. No-op at the end of the
    /// buffer. Returns whether a character was removed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Move the cursor one position left, clamped at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one position right, clamped at the buffer end.
    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Replace the buffer contents and place the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Empty the buffer and reset the cursor to 0.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}
