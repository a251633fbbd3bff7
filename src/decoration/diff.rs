//! Widget reuse between two decoration sets.

use super::set::DecorationSet;
use super::widget::WidgetKey;
use std::collections::{HashMap, VecDeque};

/// Result of diffing an old decoration set against its replacement.
///
/// Indices refer to positions in the respective sets. Every old index appears
/// exactly once in `reused` or `unmounted`, every new index exactly once in
/// `reused` or `mounted`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationDiff {
    /// `(old, new)` pairs whose widgets are equal and can stay mounted.
    pub reused: Vec<(usize, usize)>,
    /// New decorations that need a fresh element.
    pub mounted: Vec<usize>,
    /// Old decorations whose element must be destroyed.
    pub unmounted: Vec<usize>,
}

impl DecorationDiff {
    /// Match widgets of `new` against widgets of `old` by reuse identity.
    ///
    /// Equal widgets pair up in document order; position is irrelevant.
    #[must_use]
    pub fn compute(old: &DecorationSet, new: &DecorationSet) -> Self {
        let mut pool: HashMap<WidgetKey<'_>, VecDeque<usize>> = HashMap::new();
        for (idx, deco) in old.iter().enumerate() {
            pool.entry(deco.widget.key()).or_default().push_back(idx);
        }

        let mut diff = Self::default();
        for (new_idx, deco) in new.iter().enumerate() {
            match pool
                .get_mut(&deco.widget.key())
                .and_then(VecDeque::pop_front)
            {
                Some(old_idx) => diff.reused.push((old_idx, new_idx)),
                None => diff.mounted.push(new_idx),
            }
        }

        diff.unmounted = pool.into_values().flatten().collect();
        diff.unmounted.sort_unstable();
        diff
    }

    /// Check whether nothing needs to be mounted or destroyed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}
