//! Property-based tests for placeholder scanning and the live engine.
//!
//! Documents are built from pieces that never combine into new tokens: plain
//! text without name characters, stray single braces, and whole tokens. That
//! keeps the expected token count independent of the scanner under test.

mod common;

use common::assert_well_formed;
use display_props::placeholder::{contains_token, scan, substitute};
use display_props::{
    EditorHost, EngineOptions, FrontMatter, LiveEngine, MemoryEditor, Policy, Selection,
    ViewUpdate, frontmatter,
};
use proptest::prelude::*;
use std::ops::Range;

const HEADER: &str = "---\ntitle: Weekly\nauthor: Ada Lovelace\ntags: [a, b]\n---\n";
const NAMES: &[&str] = &["title", "author", "tags", "missing", "x-y_1"];

#[derive(Clone, Debug)]
enum Piece {
    Text(String),
    Brace(char),
    Token(&'static str),
}

impl Piece {
    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Brace(c) => c.to_string(),
            Self::Token(name) => format!("{{{{{name}}}}}"),
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop_oneof![
        3 => "[ .,!?éü日本\n]{1,6}".prop_map(Piece::Text),
        1 => prop_oneof![Just('{'), Just('}')].prop_map(Piece::Brace),
        2 => prop::sample::select(NAMES).prop_map(Piece::Token),
    ]
}

fn body_strategy() -> impl Strategy<Value = Vec<Piece>> {
    prop::collection::vec(piece_strategy(), 0..24)
}

fn header_props() -> FrontMatter {
    frontmatter::extract(HEADER)
}

fn render(pieces: &[Piece]) -> String {
    pieces.iter().map(Piece::render).collect()
}

fn expected_resolved(pieces: &[Piece], props: &FrontMatter) -> usize {
    pieces
        .iter()
        .filter(|p| matches!(p, Piece::Token(name) if props.contains(name)))
        .count()
}

fn header_len() -> usize {
    HEADER.chars().count()
}

/// Document plus a few arbitrary visible ranges inside it.
fn document_with_ranges() -> impl Strategy<Value = (String, Vec<Range<usize>>)> {
    body_strategy().prop_flat_map(|pieces| {
        let text = format!("{HEADER}{}", render(&pieces));
        let len = text.chars().count();
        let ranges = prop::collection::vec((0..=len, 0..=len), 0..4).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(a, b)| a.min(b)..a.max(b))
                .collect::<Vec<_>>()
        });
        (Just(text), ranges)
    })
}

// ============================================================================
// Scanner and substitution
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Every generated token is found, and resolution follows the mapping.
    #[test]
    fn scan_finds_generated_tokens(pieces in body_strategy()) {
        let props = header_props();
        let body = render(&pieces);
        let tokens: Vec<_> = scan(&body, 0, &props).collect();

        let generated = pieces.iter().filter(|p| matches!(p, Piece::Token(_))).count();
        prop_assert_eq!(tokens.len(), generated);
        prop_assert_eq!(
            tokens.iter().filter(|t| t.is_resolved()).count(),
            expected_resolved(&pieces, &props)
        );

        let chars: Vec<char> = body.chars().collect();
        for token in &tokens {
            let source: String = chars[token.start..token.end].iter().collect();
            prop_assert_eq!(source, format!("{{{{{}}}}}", token.name));
            prop_assert_eq!(token.value, props.get(token.name));
        }
    }

    /// Substituted values contain no tokens, so a second pass changes nothing.
    #[test]
    fn substitute_is_idempotent(pieces in body_strategy()) {
        let props = header_props();
        let body = render(&pieces);
        let once = substitute(&body, &props).into_owned();
        let twice = substitute(&once, &props);
        prop_assert_eq!(twice.as_ref(), once.as_str());
    }

    /// Text without any token passes through untouched.
    #[test]
    fn text_without_tokens_is_untouched(text in "[^{}]{0,40}") {
        let props = header_props();
        prop_assert!(!contains_token(&text));
        prop_assert_eq!(scan(&text, 0, &props).count(), 0);
        let out = substitute(&text, &props);
        prop_assert_eq!(out.as_ref(), text.as_str());
    }

    /// Offsets shift with the base, names and values do not.
    #[test]
    fn scan_offsets_follow_base(pieces in body_strategy(), base in 0usize..10_000) {
        let props = header_props();
        let body = render(&pieces);
        let at_zero: Vec<_> = scan(&body, 0, &props).collect();
        let shifted: Vec<_> = scan(&body, base, &props).collect();
        prop_assert_eq!(at_zero.len(), shifted.len());
        for (a, b) in at_zero.iter().zip(&shifted) {
            prop_assert_eq!(a.start + base, b.start);
            prop_assert_eq!(a.end + base, b.end);
            prop_assert_eq!(a.name, b.name);
            prop_assert_eq!(a.value, b.value);
        }
    }
}

// ============================================================================
// Live engine
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// With the whole document visible, every resolved token is decorated.
    #[test]
    fn whole_view_decorates_every_resolved_token(pieces in body_strategy()) {
        let text = format!("{HEADER}{}", render(&pieces));
        let editor = MemoryEditor::new(&text);
        let engine = LiveEngine::new(EngineOptions::with_policy(Policy::BASELINE), &editor);

        let decorations = engine.decorations();
        assert_well_formed(decorations);
        prop_assert_eq!(decorations.len(), expected_resolved(&pieces, &header_props()));
        for deco in decorations {
            prop_assert!(deco.range.start >= header_len());
            prop_assert_eq!(deco.widget.source(), deco.range.clone());
        }
    }

    /// Decorations only ever cover visible text.
    #[test]
    fn decorations_stay_inside_visible_ranges((text, ranges) in document_with_ranges()) {
        let editor = MemoryEditor::new(&text).with_visible_ranges(ranges.clone());
        let engine = LiveEngine::new(EngineOptions::default(), &editor);

        assert_well_formed(engine.decorations());
        for deco in engine.decorations() {
            prop_assert!(
                deco.range.clone().all(|pos| ranges.iter().any(|r| r.contains(&pos))),
                "decoration {:?} outside visible ranges {:?}", deco.range, ranges
            );
        }
    }

    /// A token is decorated exactly when the selection is not within it.
    #[test]
    fn selection_suppresses_only_enclosing_tokens(
        pieces in body_strategy(),
        a in 0usize..200,
        b in 0usize..200,
    ) {
        let text = format!("{HEADER}{}", render(&pieces));
        let len = text.chars().count();
        let selection = Selection::new(a.min(len), b.min(len));
        let editor = MemoryEditor::new(&text).with_selection(selection);

        let baseline = LiveEngine::new(EngineOptions::with_policy(Policy::BASELINE), &editor);
        let richer = LiveEngine::new(EngineOptions::default(), &editor);

        let expected: Vec<_> = baseline
            .decorations()
            .iter()
            .filter(|d| !editor.selection().within(d.range.start, d.range.end))
            .map(|d| d.range.clone())
            .collect();
        prop_assert_eq!(richer.decorations().ranges(), expected);
    }

    /// Rebuilding an unchanged view reuses every widget.
    #[test]
    fn unchanged_rebuild_reuses_all_widgets(pieces in body_strategy()) {
        let text = format!("{HEADER}{}", render(&pieces));
        let editor = MemoryEditor::new(&text);
        let mut engine = LiveEngine::new(EngineOptions::default(), &editor);
        let before = engine.decorations().clone();

        engine.update(&ViewUpdate::viewport_changed(), &editor);
        prop_assert_eq!(engine.decorations(), &before);
        prop_assert!(engine.last_diff().is_noop());
        prop_assert_eq!(engine.last_diff().reused.len(), before.len());
    }

    /// The engine never edits the document.
    #[test]
    fn engine_leaves_text_alone(pieces in body_strategy(), click in 0usize..200) {
        let text = format!("{HEADER}{}", render(&pieces));
        let mut editor = MemoryEditor::new(&text);
        let engine = LiveEngine::new(EngineOptions::default(), &editor);
        engine.click(click, &mut editor);
        let doc = editor.document_text();
        prop_assert_eq!(doc.as_ref(), text.as_str());
    }
}
