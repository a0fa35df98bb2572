//! History Navigator
//!
//! Up/down traversal over previously submitted lines, coupled to the
//! input buffer by the session controller. Browsing never mutates the
//! stored entries, only the transient view; when the user edits while
//! browsing, the viewed entry is adopted as the new draft.

use std::collections::VecDeque;

/// Maximum number of retained entries; the oldest is evicted on overflow.
pub const MAX_ENTRIES: usize = 100;

/// Ordered history (most recent first) plus traversal state.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    entries: VecDeque<String>,
    /// `None` means not browsing; `Some(0)` is the most recent entry.
    cursor: Option<usize>,
    /// Draft captured when browsing began. Empty whenever not browsing.
    saved_draft: String,
}

impl HistoryNavigator {
    /// Create a navigator seeded with prior lines, most recent first.
    pub fn new(initial: Vec<String>) -> Self {
        let mut entries: VecDeque<String> = initial.into();
        entries.truncate(MAX_ENTRIES);
        Self {
            entries,
            cursor: None,
            saved_draft: String::new(),
        }
    }

    /// Whether the user is currently viewing a history entry.
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is no stored history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Move toward older entries. Returns the text to load into the
    /// buffer, or `None` when nothing changes (empty history, or
    /// already clamped at the oldest entry).
    ///
    /// Entering browsing snapshots `draft` so it can be restored by
    /// [`navigate_down`](Self::navigate_down).
    pub fn navigate_up(&mut self, draft: &str) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        match self.cursor {
            None => {
                self.saved_draft = draft.to_string();
                self.cursor = Some(0);
                self.entries.front().cloned()
            }
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1).cloned()
            }
            Some(_) => None, // clamped at the oldest entry
        }
    }

    /// Move toward newer entries. Returns the text to load into the
    /// buffer, or `None` when not browsing.
    ///
    /// Stepping past the most recent entry exits browsing and yields
    /// the saved draft verbatim; a whitespace-only draft comes back as
    /// the empty string.
    pub fn navigate_down(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).cloned()
            }
            Some(_) => {
                let draft = std::mem::take(&mut self.saved_draft);
                self.cursor = None;
                if draft.trim().is_empty() {
                    Some(String::new())
                } else {
                    Some(draft)
                }
            }
        }
    }

    /// Leave browsing mode and discard the saved draft, without
    /// touching the buffer. Called when the user types or backspaces
    /// while browsing (the viewed text becomes the new draft) and on
    /// line submission.
    pub fn reset_browsing(&mut self) {
        self.cursor = None;
        self.saved_draft.clear();
    }

    /// Record a submitted line. Empty lines and duplicates of the most
    /// recent entry are skipped; overflow evicts the oldest entry.
    pub fn record(&mut self, line: &str) {
        if line.is_empty() || self.entries.front().map(String::as_str) == Some(line) {
            return;
        }
        self.entries.push_front(line.to_string());
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Replace all entries wholesale and reset browsing state.
    pub fn replace_entries(&mut self, entries: Vec<String>) {
        self.entries = entries.into();
        self.entries.truncate(MAX_ENTRIES);
        self.reset_browsing();
    }
}
