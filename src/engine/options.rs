//! Live engine configuration.

use super::update::UpdateFlags;

/// Decoration policy: how the engine treats the selection and clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Policy {
    /// Show the raw token while the selection lies within it.
    pub suppress_on_selection_overlap: bool,
    /// Clicking a widget selects its source token.
    pub interactive_widgets: bool,
}

impl Policy {
    /// Replace every resolved token unconditionally; widgets are display only.
    pub const BASELINE: Self = Self {
        suppress_on_selection_overlap: false,
        interactive_widgets: false,
    };

    /// Selection-aware replacement with clickable widgets.
    pub const RICHER: Self = Self {
        suppress_on_selection_overlap: true,
        interactive_widgets: true,
    };

    /// Update flags that trigger a rebuild under this policy.
    #[must_use]
    pub fn triggers(&self) -> UpdateFlags {
        let mut flags = UpdateFlags::DOC_CHANGED | UpdateFlags::VIEWPORT_CHANGED;
        if self.suppress_on_selection_overlap {
            flags |= UpdateFlags::SELECTION_CHANGED;
        }
        flags
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::RICHER
    }
}

/// Options for [`LiveEngine`](super::LiveEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Decoration policy.
    pub policy: Policy,
    /// Reuse the extracted front matter until the document changes.
    ///
    /// When off, every rebuild re-reads the whole document, including
    /// rebuilds caused only by scrolling or cursor movement.
    pub cache_front_matter: bool,
}

impl EngineOptions {
    /// Options with the given policy and caching on.
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            cache_front_matter: true,
        }
    }
}
