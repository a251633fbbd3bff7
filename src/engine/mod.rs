//! Live decoration engine.
//!
//! [`LiveEngine`] keeps one [`DecorationSet`] covering the visible part of an
//! editable document. Each relevant [`ViewUpdate`] rebuilds the whole set from
//! scratch:
//!
//! 1. no active document gives the empty set;
//! 2. front matter comes from the whole document text, not just the visible
//!    slice (cached until the content changes);
//! 3. every visible range is scanned on its own, so a token that straddles
//!    two ranges is never matched;
//! 4. resolved tokens become replace-decorations, except that under a
//!    selection-aware [`Policy`] a token whose span contains the whole
//!    selection keeps its source text visible for editing.
//!
//! The document text is never modified; only the selection changes, and only
//! when an interactive widget is clicked.
//!
//! # Examples
//!
//! ```
//! use display_props::{EngineOptions, LiveEngine, MemoryEditor, Selection, ViewUpdate};
//!
//! let mut editor = MemoryEditor::new("---\ntitle: Hello\n---\n{{title}} world");
//! let mut engine = LiveEngine::new(EngineOptions::default(), &editor);
//! assert_eq!(engine.decorations().len(), 1);
//!
//! // Put the cursor inside the token: its source text shows again.
//! let flags = editor.select(Selection::cursor(22));
//! engine.update(&ViewUpdate::new(flags), &editor);
//! assert!(engine.decorations().is_empty());
//! ```

mod options;
mod update;

pub use options::{EngineOptions, Policy};
pub use update::{UpdateFlags, ViewUpdate};

use crate::decoration::{Decoration, DecorationDiff, DecorationSet, PropertyWidget};
use crate::event::{EVENT_DECORATIONS_REBUILT, LogLevel, emit_event, emit_log};
use crate::frontmatter::{self, FrontMatter, FrontMatterCache};
use crate::host::EditorHost;
use crate::placeholder::scan;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Engine counters.
#[derive(Clone, Debug, Default)]
pub struct EngineStats {
    /// Number of full rebuilds.
    pub rebuilds: u64,
    /// Updates that kept the previous set.
    pub skipped_updates: u64,
    /// Wall time of the last rebuild.
    pub last_rebuild_time: Duration,
}

/// Viewport-scoped placeholder decorations for one editor.
#[derive(Debug)]
pub struct LiveEngine {
    options: EngineOptions,
    decorations: DecorationSet,
    last_diff: DecorationDiff,
    cache: FrontMatterCache,
    stats: EngineStats,
}

impl LiveEngine {
    /// Create an engine and build the initial decoration set.
    pub fn new<H: EditorHost + ?Sized>(options: EngineOptions, host: &H) -> Self {
        let mut engine = Self {
            options,
            decorations: DecorationSet::none(),
            last_diff: DecorationDiff::default(),
            cache: FrontMatterCache::new(),
            stats: EngineStats::default(),
        };
        engine.rebuild(host);
        engine
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Current decoration set.
    #[must_use]
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Widget reuse between the previous set and the current one.
    #[must_use]
    pub fn last_diff(&self) -> &DecorationDiff {
        &self.last_diff
    }

    /// Engine counters.
    #[must_use]
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    /// Switch policy and rebuild.
    pub fn set_policy<H: EditorHost + ?Sized>(&mut self, policy: Policy, host: &H) {
        self.options.policy = policy;
        self.rebuild(host);
    }

    /// React to an editor update.
    ///
    /// Rebuilds when the update carries a flag the policy cares about and
    /// returns `true`; otherwise the previous set is kept.
    pub fn update<H: EditorHost + ?Sized>(&mut self, update: &ViewUpdate, host: &H) -> bool {
        if update.is_doc_changed() {
            self.cache.invalidate();
        }
        if !update.flags.intersects(self.options.policy.triggers()) {
            self.stats.skipped_updates += 1;
            return false;
        }
        self.rebuild(host);
        true
    }

    /// Forward a pointer activation at document offset `pos`.
    ///
    /// Returns `true` when a decoration covers `pos` and its widget handled
    /// the click.
    pub fn click<H: EditorHost + ?Sized>(&self, pos: usize, host: &mut H) -> bool {
        self.decorations
            .find(pos)
            .is_some_and(|deco| deco.widget.on_click(host))
    }

    /// Compute the decoration set for the host's current state.
    pub fn build<H: EditorHost + ?Sized>(&mut self, host: &H) -> DecorationSet {
        if !host.has_active_document() {
            return DecorationSet::none();
        }

        let policy = self.options.policy;
        let text = host.document_text();
        let fresh: FrontMatter;
        let props = if self.options.cache_front_matter {
            self.cache.get_or_extract(&text)
        } else {
            fresh = frontmatter::extract(&text);
            &fresh
        };
        if props.is_empty() {
            return DecorationSet::none();
        }

        let selection = host.selection();
        let mut decorations = Vec::new();
        for range in normalize_ranges(host.visible_ranges(), host.len_chars()) {
            let slice = host.slice(range.clone());
            for token in scan(&slice, range.start, props) {
                let Some(value) = token.value else {
                    continue;
                };
                if policy.suppress_on_selection_overlap && selection.within(token.start, token.end)
                {
                    continue;
                }
                let widget =
                    PropertyWidget::new(token.name, value, token.range(), policy.interactive_widgets);
                decorations.push(Decoration::replace(token.range(), widget));
            }
        }

        DecorationSet::new(decorations).unwrap_or_else(|e| {
            emit_log(LogLevel::Warn, &format!("decorations dropped: {e}"));
            DecorationSet::none()
        })
    }

    fn rebuild<H: EditorHost + ?Sized>(&mut self, host: &H) {
        let started = Instant::now();
        let next = self.build(host);
        self.last_diff = DecorationDiff::compute(&self.decorations, &next);
        self.decorations = next;

        self.stats.rebuilds += 1;
        self.stats.last_rebuild_time = started.elapsed();
        emit_event(
            EVENT_DECORATIONS_REBUILT,
            &format!(
                "{{\"count\":{},\"reused\":{},\"mounted\":{},\"unmounted\":{}}}",
                self.decorations.len(),
                self.last_diff.reused.len(),
                self.last_diff.mounted.len(),
                self.last_diff.unmounted.len()
            ),
        );
    }
}

/// Clamp visible ranges to the document, drop empty ones, sort them and merge
/// the ones that overlap. Touching ranges stay separate.
fn normalize_ranges(mut ranges: Vec<Range<usize>>, len: usize) -> Vec<Range<usize>> {
    for range in &mut ranges {
        range.end = range.end.min(len);
        range.start = range.start.min(range.end);
    }
    ranges.retain(|r| r.start < r.end);
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start < last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}
