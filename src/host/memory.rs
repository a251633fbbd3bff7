//! In-memory host implementations.
//!
//! [`MemoryEditor`] is a headless editor built on [`DocumentText`]: it keeps a
//! selection, a list of visible ranges and an active-document flag, and every
//! mutation reports the [`UpdateFlags`] a real editor would dispatch.
//! [`MemoryVault`] maps source paths to document text for the static pass.

use super::{DocumentText, EditorHost, Selection};
use crate::engine::UpdateFlags;
use crate::error::{Error, Result};
use crate::render::Vault;
use std::borrow::Cow;
use std::collections::HashMap;
use std::ops::Range;

/// Headless editor host backed by a rope.
#[derive(Clone, Debug)]
pub struct MemoryEditor {
    text: DocumentText,
    selection: Selection,
    // `None` shows the whole document.
    visible: Option<Vec<Range<usize>>>,
    active: bool,
    focused: bool,
}

impl MemoryEditor {
    /// Create an editor showing the whole of `text`, cursor at the start.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: DocumentText::from_str(text),
            selection: Selection::default(),
            visible: None,
            active: true,
            focused: false,
        }
    }

    /// Set the visible ranges (builder pattern).
    #[must_use]
    pub fn with_visible_ranges(mut self, ranges: Vec<Range<usize>>) -> Self {
        self.visible = Some(ranges);
        self
    }

    /// Set the selection (builder pattern).
    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Get the document text store.
    #[must_use]
    pub fn text(&self) -> &DocumentText {
        &self.text
    }

    /// Check whether the editor has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Remove focus, as if the user clicked elsewhere.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Open or close the document. No update is dispatched for this.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Insert text at a character offset.
    pub fn insert(&mut self, at: usize, text: &str) -> UpdateFlags {
        let at = at.min(self.text.len_chars());
        let n = text.chars().count();
        if n == 0 {
            return UpdateFlags::empty();
        }
        self.text.insert(at, text);

        let map = |pos: usize| if pos >= at { pos + n } else { pos };
        let mut flags = UpdateFlags::DOC_CHANGED;
        flags |= self.map_selection(map);
        flags |= self.map_visible(map);
        flags
    }

    /// Remove a character range.
    pub fn remove(&mut self, range: Range<usize>) -> UpdateFlags {
        let len = self.text.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start == end {
            return UpdateFlags::empty();
        }
        self.text.remove(start..end);

        let n = end - start;
        let map = |pos: usize| {
            if pos >= end {
                pos - n
            } else if pos > start {
                start
            } else {
                pos
            }
        };
        let mut flags = UpdateFlags::DOC_CHANGED;
        flags |= self.map_selection(map);
        flags |= self.map_visible(map);
        flags
    }

    /// Move the cursor.
    pub fn set_cursor(&mut self, pos: usize) -> UpdateFlags {
        self.select(Selection::cursor(pos.min(self.text.len_chars())))
    }

    /// Replace the selection.
    pub fn select(&mut self, selection: Selection) -> UpdateFlags {
        if selection == self.selection {
            return UpdateFlags::empty();
        }
        self.selection = selection;
        UpdateFlags::SELECTION_CHANGED
    }

    /// Replace the visible ranges.
    pub fn set_visible_ranges(&mut self, ranges: Vec<Range<usize>>) -> UpdateFlags {
        if self.visible.as_ref() == Some(&ranges) {
            return UpdateFlags::empty();
        }
        self.visible = Some(ranges);
        UpdateFlags::VIEWPORT_CHANGED
    }

    /// Scroll so that `count` lines starting at `first_line` are visible.
    pub fn show_lines(&mut self, first_line: usize, count: usize) -> UpdateFlags {
        let range = self.text.lines_range(first_line, count);
        self.set_visible_ranges(vec![range])
    }

    fn map_selection(&mut self, map: impl Fn(usize) -> usize) -> UpdateFlags {
        let mapped = Selection::new(map(self.selection.from), map(self.selection.to));
        if mapped == self.selection {
            UpdateFlags::empty()
        } else {
            self.selection = mapped;
            UpdateFlags::SELECTION_CHANGED
        }
    }

    fn map_visible(&mut self, map: impl Fn(usize) -> usize) -> UpdateFlags {
        let Some(ranges) = self.visible.as_mut() else {
            // Whole-document view grows and shrinks with the text.
            return UpdateFlags::VIEWPORT_CHANGED;
        };
        let before = ranges.clone();
        for range in ranges.iter_mut() {
            *range = map(range.start)..map(range.end);
        }
        if *ranges == before {
            UpdateFlags::empty()
        } else {
            UpdateFlags::VIEWPORT_CHANGED
        }
    }
}

impl Default for MemoryEditor {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorHost for MemoryEditor {
    fn document_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.text.to_string())
    }

    fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        Cow::Owned(self.text.slice(range))
    }

    fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    fn has_active_document(&self) -> bool {
        self.active
    }

    fn visible_ranges(&self) -> Vec<Range<usize>> {
        match &self.visible {
            Some(ranges) => ranges.clone(),
            None => vec![0..self.text.len_chars()],
        }
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// Source-path to document-text store.
///
/// Paths ending in `/` name folders and are rejected with
/// [`Error::NotAFile`], as are unknown paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryVault {
    files: HashMap<String, String>,
}

impl MemoryVault {
    /// Create an empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file (builder pattern).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl Vault for MemoryVault {
    fn read(&self, source_path: &str) -> Result<String> {
        if source_path.is_empty() || source_path.ends_with('/') {
            return Err(Error::NotAFile(source_path.to_string()));
        }
        self.files
            .get(source_path)
            .cloned()
            .ok_or_else(|| Error::NotAFile(source_path.to_string()))
    }
}
