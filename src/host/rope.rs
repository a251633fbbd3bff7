//! Rope-backed document text using the ropey crate.

use ropey::Rope;
use std::ops::Range;

/// Document text with character-offset editing and line lookup.
#[derive(Clone, Debug)]
pub struct DocumentText {
    rope: Rope,
}

impl DocumentText {
    /// Create a document from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Copy out a character range, clamped to the document.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at a character position. Out-of-range positions append.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let idx = char_idx.min(self.len_chars());
        self.rope.insert(idx, text);
    }

    /// Remove a character range, clamped to the document.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    /// Get the char index at the start of a line.
    #[must_use]
    pub fn line_to_char(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(line_idx)
        }
    }

    /// Character range spanning `count` lines starting at `first_line`.
    #[must_use]
    pub fn lines_range(&self, first_line: usize, count: usize) -> Range<usize> {
        let start = self.line_to_char(first_line);
        let end = self.line_to_char(first_line.saturating_add(count));
        start..end
    }
}
