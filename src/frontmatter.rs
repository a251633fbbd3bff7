//! Front-matter extraction.
//!
//! A document's front matter is a YAML block delimited by `---` lines at the
//! very top of the text:
//!
//! ```text
//! ---
//! title: Hello
//! tags: [a, b]
//! ---
//! Body text with {{title}}.
//! ```
//!
//! [`extract`] flattens that block into a [`FrontMatter`] string mapping and
//! never fails: a missing, empty or malformed header yields an empty mapping.
//!
//! # Examples
//!
//! ```
//! use display_props::frontmatter;
//!
//! let props = frontmatter::extract("---\ntitle: Hello\ncount: 3\n---\nbody");
//! assert_eq!(props.get("title"), Some("Hello"));
//! assert_eq!(props.get("count"), Some("3"));
//!
//! let none = frontmatter::extract("---\ntitle: [unclosed\n---\n");
//! assert!(none.is_empty());
//! ```

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use serde_yaml::Value;
use std::collections::HashMap;
use std::collections::hash_map;

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Flat property-name to string-value mapping derived from a front-matter block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    props: HashMap<String, String>,
}

impl FrontMatter {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property value by name. Names are case-sensitive.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    /// Check whether a property is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FrontMatter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for FrontMatter {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

/// Location of a front-matter block inside a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontMatterBlock<'a> {
    /// Raw YAML between the delimiters, without the delimiter lines.
    pub yaml: &'a str,
    /// Character offset of the first body character after the block.
    pub body_start: usize,
}

/// Locate the front-matter block at the top of `text`.
///
/// The first line must be exactly `---` (trailing whitespace is ignored, a
/// leading byte-order mark is skipped). The block runs until the next `---`
/// line; without one, the rest of the document is the block.
#[must_use]
pub fn split(text: &str) -> Option<FrontMatterBlock<'_>> {
    let text_after_bom = text.strip_prefix(BOM).unwrap_or(text);
    let bom_bytes = text.len() - text_after_bom.len();

    let mut lines = text_after_bom.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = bom_bytes + first.len();
    let mut cursor = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &text[yaml_start..cursor];
            let body_byte = cursor + line.len();
            return Some(FrontMatterBlock {
                yaml,
                body_start: text[..body_byte].chars().count(),
            });
        }
        cursor += line.len();
    }

    Some(FrontMatterBlock {
        yaml: &text[yaml_start..],
        body_start: text.chars().count(),
    })
}

/// Parse the front matter of `text`, reporting YAML errors.
///
/// Returns an empty mapping when there is no header or the header is empty.
pub fn parse(text: &str) -> Result<FrontMatter> {
    let Some(block) = split(text) else {
        return Ok(FrontMatter::new());
    };
    if block.yaml.trim().is_empty() {
        return Ok(FrontMatter::new());
    }

    let value: Value =
        serde_yaml::from_str(block.yaml).map_err(|e| Error::FrontMatter(e.to_string()))?;

    let Value::Mapping(mapping) = value else {
        return Ok(FrontMatter::new());
    };

    let mut props = FrontMatter::new();
    for (key, value) in &mapping {
        let (Some(name), Some(text)) = (scalar_text(key), coerce(value)) else {
            continue;
        };
        props.insert(name, text);
    }
    Ok(props)
}

/// Extract the front matter of `text`, swallowing parse failures.
#[must_use]
pub fn extract(text: &str) -> FrontMatter {
    match parse(text) {
        Ok(props) => props,
        Err(e) => {
            emit_log(LogLevel::Debug, &format!("front matter ignored: {e}"));
            FrontMatter::new()
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

// Sequences of scalars flatten to a comma-separated list; anything deeper is dropped.
fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(items) => {
            let parts = items.iter().map(scalar_text).collect::<Option<Vec<_>>>()?;
            Some(parts.join(", "))
        }
        Value::Tagged(tagged) => coerce(&tagged.value),
        other => scalar_text(other),
    }
}

/// Caches the mapping extracted from a document until it is invalidated.
///
/// The live engine invalidates on content changes only, so scrolling and
/// cursor movement reuse the previous extraction.
#[derive(Clone, Debug, Default)]
pub struct FrontMatterCache {
    cached: Option<FrontMatter>,
    extractions: u64,
}

impl FrontMatterCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached mapping, extracting from `text` if there is none.
    pub fn get_or_extract(&mut self, text: &str) -> &FrontMatter {
        if self.cached.is_none() {
            self.extractions += 1;
        }
        self.cached.get_or_insert_with(|| extract(text))
    }

    /// Drop the cached mapping.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Check whether a mapping is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Number of extractions performed so far.
    #[must_use]
    pub fn extractions(&self) -> u64 {
        self.extractions
    }
}
