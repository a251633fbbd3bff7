//! Inline element shown in place of a resolved placeholder.

use crate::host::{EditorHost, Selection};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// CSS class carried by rendered property elements.
pub const INLINE_PROPERTY_CLASS: &str = "cm-inline-property";

/// Widget that replaces the source text of a `{{name}}` token.
///
/// Two widgets are equal when they would render identically, which lets the
/// rendering layer keep a mounted element across a rebuild: the value must
/// match, and for interactive widgets the property name too. The source
/// position never takes part, so a placeholder that moves after an edit keeps
/// its element.
#[derive(Clone, Debug)]
pub struct PropertyWidget {
    name: String,
    value: String,
    source: Range<usize>,
    interactive: bool,
}

/// Identity used for widget reuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetKey<'a> {
    pub interactive: bool,
    pub value: &'a str,
    pub name: Option<&'a str>,
}

/// Rendered form of a widget: a single inline run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub class: &'static str,
    pub interactive: bool,
}

impl PropertyWidget {
    /// Create a widget for the token at `source`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        source: Range<usize>,
        interactive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source,
            interactive,
        }
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved value shown to the user.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Source range of the `{{name}}` token in the document.
    #[must_use]
    pub fn source(&self) -> Range<usize> {
        self.source.clone()
    }

    /// Whether clicking the widget selects its source token.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Reuse identity of this widget.
    #[must_use]
    pub fn key(&self) -> WidgetKey<'_> {
        WidgetKey {
            interactive: self.interactive,
            value: &self.value,
            name: self.interactive.then_some(self.name.as_str()),
        }
    }

    /// Render the widget.
    #[must_use]
    pub fn to_inline(&self) -> InlineSpan {
        InlineSpan {
            text: self.value.clone(),
            class: INLINE_PROPERTY_CLASS,
            interactive: self.interactive,
        }
    }

    /// Terminal cell width of the rendered value.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.value.width()
    }

    /// Handle a pointer activation.
    ///
    /// Interactive widgets select their source token and focus the editor, so
    /// the raw `{{name}}` is ready to edit. Returns `false` when the widget
    /// ignores clicks.
    pub fn on_click<H: EditorHost + ?Sized>(&self, host: &mut H) -> bool {
        if !self.interactive {
            return false;
        }
        host.set_selection(Selection::covering(&self.source));
        host.focus();
        true
    }
}

impl PartialEq for PropertyWidget {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for PropertyWidget {}
