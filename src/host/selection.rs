//! Cursor and selection extent.

use std::ops::Range;

/// Main selection of an editor, in character offsets.
///
/// A collapsed selection (`from == to`) is a plain cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    /// Create a selection between two offsets, in any order.
    #[must_use]
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            from: anchor.min(head),
            to: anchor.max(head),
        }
    }

    /// Create a collapsed selection at `pos`.
    #[must_use]
    pub fn cursor(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    /// Create a selection covering `range`.
    #[must_use]
    pub fn covering(range: &Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }

    /// Check if the selection is a plain cursor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Check whether the selection lies entirely within `[start, end]`.
    ///
    /// Both ends are inclusive, so a cursor sitting right after a token's
    /// closing braces still counts as inside it.
    #[must_use]
    pub fn within(&self, start: usize, end: usize) -> bool {
        self.from >= start && self.to <= end
    }
}
