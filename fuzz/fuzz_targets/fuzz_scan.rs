//! Fuzz target for placeholder scanning and substitution.
//!
//! Tests that token offsets are valid character ranges over arbitrary text
//! and that substitution never panics.

#![no_main]

use display_props::FrontMatter;
use display_props::placeholder::{scan, substitute};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, Vec<(String, String)>)| {
    let (text, pairs) = input;
    let props: FrontMatter = pairs.into_iter().collect();
    let len = text.chars().count();

    let mut last_end = 0;
    for token in scan(text, 0, &props) {
        assert!(token.start >= last_end);
        assert!(token.start < token.end);
        assert!(token.end <= len);
        assert_eq!(token.end - token.start, token.name.chars().count() + 4);
        last_end = token.end;
    }

    let _ = substitute(text, &props);
});
