//! Literal text substitution of resolved placeholders.

use super::scanner::TOKEN;
use crate::frontmatter::FrontMatter;
use regex::Captures;
use std::borrow::Cow;

/// Replace every resolvable `{{name}}` in `text` with its value.
///
/// Unresolved names stay literal. A property whose value is the empty string
/// also leaves its token literal, so a blank header field never makes text
/// disappear from a rendered page. Any other value is substituted, including
/// `0` and `false`: header values are already coerced to text, so they are
/// as displayable as any other string. Returns `Cow::Borrowed` when nothing
/// was replaced.
///
/// # Examples
///
/// ```
/// use display_props::FrontMatter;
/// use display_props::placeholder::substitute;
///
/// let props: FrontMatter = [("title", "Hello")].into_iter().collect();
/// assert_eq!(substitute("{{title}} world", &props), "Hello world");
/// assert_eq!(substitute("{{missing}}", &props), "{{missing}}");
/// ```
#[must_use]
pub fn substitute<'t>(text: &'t str, props: &FrontMatter) -> Cow<'t, str> {
    TOKEN.replace_all(text, |caps: &Captures<'_>| {
        match props.get(&caps[1]) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => caps[0].to_string(),
        }
    })
}

/// Count how many tokens [`substitute`] would replace in `text`.
#[must_use]
pub fn count_substitutions(text: &str, props: &FrontMatter) -> usize {
    TOKEN
        .captures_iter(text)
        .filter(|caps| props.get(&caps[1]).is_some_and(|v| !v.is_empty()))
        .count()
}
