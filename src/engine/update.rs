//! View update descriptions dispatched by the host.

use bitflags::bitflags;

bitflags! {
    /// What changed in the editor since the last update.
    ///
    /// Flags combine with bitwise OR; an update with no flags set is a
    /// no-op for the engine.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct UpdateFlags: u8 {
        /// Document content changed.
        const DOC_CHANGED       = 0x01;
        /// Visible ranges changed (scroll, resize, folding).
        const VIEWPORT_CHANGED  = 0x02;
        /// Main selection moved.
        const SELECTION_CHANGED = 0x04;
        /// Focus moved in or out of the editor.
        const FOCUS_CHANGED     = 0x08;
    }
}

/// A single editor update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub flags: UpdateFlags,
}

impl ViewUpdate {
    /// Create an update from flags.
    #[must_use]
    pub fn new(flags: UpdateFlags) -> Self {
        Self { flags }
    }

    /// Content change.
    #[must_use]
    pub fn doc_changed() -> Self {
        Self::new(UpdateFlags::DOC_CHANGED)
    }

    /// Viewport change.
    #[must_use]
    pub fn viewport_changed() -> Self {
        Self::new(UpdateFlags::VIEWPORT_CHANGED)
    }

    /// Selection change.
    #[must_use]
    pub fn selection_changed() -> Self {
        Self::new(UpdateFlags::SELECTION_CHANGED)
    }

    #[must_use]
    pub fn is_doc_changed(&self) -> bool {
        self.flags.contains(UpdateFlags::DOC_CHANGED)
    }

    #[must_use]
    pub fn is_viewport_changed(&self) -> bool {
        self.flags.contains(UpdateFlags::VIEWPORT_CHANGED)
    }

    #[must_use]
    pub fn is_selection_changed(&self) -> bool {
        self.flags.contains(UpdateFlags::SELECTION_CHANGED)
    }
}

impl From<UpdateFlags> for ViewUpdate {
    fn from(flags: UpdateFlags) -> Self {
        Self::new(flags)
    }
}
