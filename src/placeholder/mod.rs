//! Placeholder token scanning and substitution.
//!
//! A placeholder is `{{name}}` where `name` matches `[A-Za-z0-9_-]+`. There is
//! no escaping and no whitespace tolerance inside the braces. Names resolve
//! against a [`FrontMatter`](crate::FrontMatter) mapping; resolution is a single
//! lookup, values are never scanned again.
//!
//! - [`scan`] yields every token with its resolution, for the live engine.
//! - [`substitute`] rewrites text in place of resolved tokens, for the static
//!   pass.

mod scanner;
mod substitute;

pub use scanner::{MatchRecord, PlaceholderToken, Scan, contains_token, scan, scan_resolved};
pub use substitute::{count_substitutions, substitute};
