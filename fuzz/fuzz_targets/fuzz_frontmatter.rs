//! Fuzz target for front-matter extraction.
//!
//! Tests that arbitrary documents never panic the header split or the YAML
//! coercion, and that extraction agrees with parsing.

#![no_main]

use display_props::frontmatter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let props = frontmatter::extract(data);

    match frontmatter::split(data) {
        Some(block) => assert!(block.body_start <= data.chars().count()),
        None => assert!(props.is_empty()),
    }

    // extract falls back to an empty mapping on bad YAML
    match frontmatter::parse(data) {
        Ok(parsed) => assert_eq!(parsed, props),
        Err(_) => assert!(props.is_empty()),
    }
});
