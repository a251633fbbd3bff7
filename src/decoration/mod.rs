//! Replace-decorations and the inline widgets they show.
//!
//! Key types:
//!
//! - [`PropertyWidget`]: the inline element standing in for a `{{name}}` token
//! - [`Decoration`]: a `(range, widget)` pair with replace semantics
//! - [`DecorationSet`]: sorted, non-overlapping decorations for one refresh
//! - [`DecorationDiff`]: which widgets survive from one set to the next

mod diff;
mod set;
mod widget;

pub use diff::DecorationDiff;
pub use set::{Decoration, DecorationSet};
pub use widget::{INLINE_PROPERTY_CLASS, InlineSpan, PropertyWidget, WidgetKey};
