//! Linear scanner for `{{name}}` placeholder tokens.

use crate::frontmatter::FrontMatter;
use regex::{CaptureMatches, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// `{{` + one or more of `[A-Za-z0-9_-]` + `}}`. No escaping, no whitespace.
pub(super) static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_-]+)\}\}").unwrap_or_else(|e| panic!("placeholder regex: {e}"))
});

/// A syntactic `{{name}}` occurrence, resolved or not.
///
/// Offsets are character offsets, already shifted by the scan's offset base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceholderToken<'a> {
    pub start: usize,
    pub end: usize,
    pub name: &'a str,
    /// Resolved front-matter value; `None` when the name is not defined.
    pub value: Option<&'a str>,
}

impl PlaceholderToken<'_> {
    /// Character range of the whole token, braces included.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check whether the name resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// Convert into an owned record if the name resolved.
    #[must_use]
    pub fn to_record(&self) -> Option<MatchRecord> {
        self.value.map(|value| MatchRecord {
            start: self.start,
            end: self.end,
            name: self.name.to_string(),
            value: value.to_string(),
        })
    }
}

/// A resolved placeholder: `{start, end, name, value}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    pub start: usize,
    pub end: usize,
    pub name: String,
    pub value: String,
}

impl MatchRecord {
    /// Character range of the token.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Lazy iterator over the placeholder tokens of a text span.
///
/// Created by [`scan`]. Tokens come out left to right, so they are sorted by
/// start offset and never overlap.
pub struct Scan<'a> {
    text: &'a str,
    props: &'a FrontMatter,
    matches: CaptureMatches<'static, 'a>,
    offset_base: usize,
    // Byte position and char count of the last consumed match end.
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Scan<'a> {
    fn char_offset(&mut self, byte: usize) -> usize {
        self.char_pos += self.text[self.byte_pos..byte].chars().count();
        self.byte_pos = byte;
        self.char_pos
    }
}

impl<'a> Iterator for Scan<'a> {
    type Item = PlaceholderToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?.as_str();

        let start = self.char_offset(whole.start());
        let end = self.char_offset(whole.end());

        Some(PlaceholderToken {
            start: self.offset_base + start,
            end: self.offset_base + end,
            name,
            value: self.props.get(name),
        })
    }
}

/// Scan `text` for placeholder tokens, resolving names against `props`.
///
/// `offset_base` is the character offset of `text` within the document, so the
/// returned offsets are absolute. Scanning the same input twice yields the same
/// tokens.
///
/// # Examples
///
/// ```
/// use display_props::FrontMatter;
/// use display_props::placeholder::scan;
///
/// let props: FrontMatter = [("title", "Hello")].into_iter().collect();
/// let tokens: Vec<_> = scan("{{title}} {{missing}}", 100, &props).collect();
/// assert_eq!(tokens[0].range(), 100..109);
/// assert_eq!(tokens[0].value, Some("Hello"));
/// assert_eq!(tokens[1].value, None);
/// ```
#[must_use]
pub fn scan<'a>(text: &'a str, offset_base: usize, props: &'a FrontMatter) -> Scan<'a> {
    Scan {
        text,
        props,
        matches: TOKEN.captures_iter(text),
        offset_base,
        byte_pos: 0,
        char_pos: 0,
    }
}

/// Scan `text` and keep only resolved tokens, as owned records.
pub fn scan_resolved<'a>(
    text: &'a str,
    offset_base: usize,
    props: &'a FrontMatter,
) -> impl Iterator<Item = MatchRecord> + 'a {
    scan(text, offset_base, props).filter_map(|token| token.to_record())
}

/// Check whether `text` contains any syntactic placeholder token.
#[must_use]
pub fn contains_token(text: &str) -> bool {
    TOKEN.is_match(text)
}
