//! Replace-decorations and ordered decoration sets.

use super::widget::PropertyWidget;
use crate::error::{Error, Result};
use std::ops::Range;

/// Hide the source text in `range` and show `widget` instead.
///
/// The document itself is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub range: Range<usize>,
    pub widget: PropertyWidget,
}

impl Decoration {
    /// Create a replace-decoration.
    #[must_use]
    pub fn replace(range: Range<usize>, widget: PropertyWidget) -> Self {
        Self { range, widget }
    }

    /// Check if this decoration overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }

    /// Check if this decoration covers a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }
}

/// Non-overlapping decorations sorted by start offset.
///
/// Both properties are checked on construction, so every set handed to the
/// rendering layer upholds them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// The empty set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a set from decorations already in document order.
    pub fn new(decorations: Vec<Decoration>) -> Result<Self> {
        let mut previous: Option<&Decoration> = None;
        for deco in &decorations {
            if deco.range.start >= deco.range.end {
                return Err(Error::EmptyDecoration {
                    at: deco.range.start,
                });
            }
            if let Some(prev) = previous {
                if deco.range.start < prev.range.start {
                    return Err(Error::UnsortedDecorations {
                        previous: prev.range.start,
                        next: deco.range.start,
                    });
                }
                if prev.overlaps(deco) {
                    return Err(Error::OverlappingDecorations {
                        first: prev.range.clone(),
                        second: deco.range.clone(),
                    });
                }
            }
            previous = Some(deco);
        }
        Ok(Self { decorations })
    }

    /// Number of decorations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// Iterate in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    /// Decorations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Ranges of all decorations, in order.
    #[must_use]
    pub fn ranges(&self) -> Vec<Range<usize>> {
        self.decorations.iter().map(|d| d.range.clone()).collect()
    }

    /// Find the decoration covering `pos`.
    #[must_use]
    pub fn find(&self, pos: usize) -> Option<&Decoration> {
        let idx = self.decorations.partition_point(|d| d.range.end <= pos);
        self.decorations.get(idx).filter(|d| d.contains(pos))
    }

    /// Render `text` the way the decorated view shows it.
    ///
    /// `text` must start at document offset `base`. Decorations outside the
    /// span are ignored; ones that cross its edges are left undecorated.
    #[must_use]
    pub fn apply(&self, text: &str, base: usize) -> String {
        let end = base + text.chars().count();
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        let mut pos = base;
        for deco in &self.decorations {
            if deco.range.start < pos || deco.range.end > end {
                continue;
            }
            out.extend(chars.by_ref().take(deco.range.start - pos));
            out.push_str(deco.widget.value());
            chars.by_ref().take(deco.range.end - deco.range.start).for_each(drop);
            pos = deco.range.end;
        }
        out.extend(chars);
        out
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}
