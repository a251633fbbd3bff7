//! Host editor capabilities.
//!
//! The live engine never touches a concrete editor framework. Everything it
//! needs from the host goes through [`EditorHost`]: reading document text,
//! asking whether a document is active, reading and setting the selection,
//! and querying the visible ranges. All offsets are character offsets.
//!
//! [`MemoryEditor`] implements the trait on top of a rope for tests and
//! headless use.

mod memory;
mod rope;
mod selection;

pub use memory::{MemoryEditor, MemoryVault};
pub use rope::DocumentText;
pub use selection::Selection;

use std::borrow::Cow;
use std::ops::Range;

/// Capabilities the live engine and interactive widgets require from an editor.
pub trait EditorHost {
    /// Full text of the document shown in the editor.
    fn document_text(&self) -> Cow<'_, str>;

    /// Text of a character range, clamped to the document.
    fn slice(&self, range: Range<usize>) -> Cow<'_, str> {
        let text = self.document_text();
        let sliced: String = text
            .chars()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start))
            .collect();
        Cow::Owned(sliced)
    }

    /// Document length in characters.
    fn len_chars(&self) -> usize {
        self.document_text().chars().count()
    }

    /// Whether the workspace currently has an active document.
    fn has_active_document(&self) -> bool;

    /// Currently rendered ranges, in document order.
    fn visible_ranges(&self) -> Vec<Range<usize>>;

    /// Main selection.
    fn selection(&self) -> Selection;

    /// Replace the main selection.
    fn set_selection(&mut self, selection: Selection);

    /// Move input focus to the editable surface.
    fn focus(&mut self);
}
