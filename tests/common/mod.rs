//! Shared fixtures for integration tests.

#![allow(dead_code)]

use display_props::DecorationSet;
use tracing::Level;

/// A note with a header and several placeholders spread over many lines.
pub const NOTE: &str = "---
title: Weekly Review
author: Ada
status: draft
tags: [planning, review]
---
# {{title}}

Written by {{author}}, currently {{status}}.
Tags: {{tags}}. Unknown: {{missing}}.

{{title}} again, then {{author}}{{status}} back to back.
";

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Character offset of the first occurrence of `needle` in `text`.
pub fn char_offset(text: &str, needle: &str) -> usize {
    let byte = text
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found"));
    text[..byte].chars().count()
}

/// Character offset of the `nth` occurrence (0-based) of `needle` in `text`.
pub fn nth_char_offset(text: &str, needle: &str, nth: usize) -> usize {
    let (byte, _) = text
        .match_indices(needle)
        .nth(nth)
        .unwrap_or_else(|| panic!("occurrence {nth} of {needle:?} not found"));
    text[..byte].chars().count()
}

/// Assert the ordering and non-overlap invariants of a decoration set.
pub fn assert_well_formed(set: &DecorationSet) {
    let mut last_end = 0usize;
    for deco in set {
        assert!(
            deco.range.start < deco.range.end,
            "decoration has empty range {:?}",
            deco.range
        );
        assert!(
            deco.range.start >= last_end,
            "decoration {:?} overlaps or precedes previous end {last_end}",
            deco.range
        );
        last_end = deco.range.end;
    }
}

/// Decorated values, in document order.
pub fn values(set: &DecorationSet) -> Vec<String> {
    set.iter().map(|d| d.widget.value().to_string()).collect()
}
