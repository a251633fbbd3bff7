//! Read-mode pass over rendered trees.

mod common;

use common::{NOTE, init_logging};
use display_props::MemoryVault;
use display_props::render::{Element, Node, post_process};
use tracing::{Level, info, span};

fn vault() -> MemoryVault {
    MemoryVault::new()
        .with_file("notes/weekly.md", NOTE)
        .with_file("notes/plain.md", "{{title}} without a header")
        .with_file("notes/broken.md", "---\ntitle: [oops\n---\n{{title}}")
        .with_file("notes/empty.md", "---\ntitle: \"\"\n---\n{{title}}")
}

/// Roughly what a markdown renderer emits for the body of `NOTE`.
fn rendered_note() -> Element {
    Element::new("div")
        .child(Element::new("h1").with_text("{{title}}"))
        .child(
            Element::new("p")
                .with_text("Written by ")
                .child(Element::new("strong").with_text("{{author}}"))
                .with_text(", currently {{status}}."),
        )
        .child(Element::new("p").with_text("Tags: {{tags}}. Unknown: {{missing}}."))
        .child(
            Element::new("ul")
                .child(Element::new("li").with_text("{{author}}{{status}}"))
                .child(Element::new("li").with_text("no tokens here")),
        )
}

#[test]
fn rewrites_rendered_note() {
    init_logging();
    let span = span!(Level::INFO, "rewrites_rendered_note");
    let _enter = span.enter();

    let mut page = rendered_note();
    let report = post_process(&mut page, "notes/weekly.md", &vault());
    info!(?report, "static pass finished");

    assert!(!report.skipped);
    // h1, strong, tags paragraph, two list items.
    assert_eq!(report.nodes_visited, 5);
    assert_eq!(report.nodes_rewritten, 4);

    insta::assert_snapshot!(
        page.text_content(),
        @"Weekly ReviewWritten by Ada, currently {{status}}.Tags: planning, review. Unknown: {{missing}}.Adadraftno tokens here"
    );
}

#[test]
fn mixed_content_paragraph_keeps_its_own_text_runs() {
    let mut page = rendered_note();
    post_process(&mut page, "notes/weekly.md", &vault());

    let Node::Element(paragraph) = &page.children[1] else {
        panic!("expected paragraph element");
    };
    assert_eq!(paragraph.children[0], Node::text("Written by "));
    assert_eq!(paragraph.children[2], Node::text(", currently {{status}}."));
}

#[test]
fn documents_without_header_leave_tokens_literal() {
    let mut page = Element::new("div").child(Element::new("p").with_text("{{title}}"));
    let report = post_process(&mut page, "notes/plain.md", &vault());
    assert!(!report.skipped);
    assert_eq!(report.nodes_rewritten, 0);
    assert_eq!(page.text_content(), "{{title}}");
}

#[test]
fn malformed_header_is_treated_as_empty() {
    let mut page = Element::new("div").child(Element::new("p").with_text("{{title}}"));
    let report = post_process(&mut page, "notes/broken.md", &vault());
    assert!(!report.skipped);
    assert_eq!(page.text_content(), "{{title}}");
}

#[test]
fn empty_values_stay_literal() {
    let mut page = Element::new("div").child(Element::new("p").with_text("[{{title}}]"));
    post_process(&mut page, "notes/empty.md", &vault());
    assert_eq!(page.text_content(), "[{{title}}]");
}

#[test]
fn unreadable_sources_skip_the_pass() {
    for path in ["notes/", "", "notes/absent.md"] {
        let mut page = rendered_note();
        let before = page.clone();
        let report = post_process(&mut page, path, &vault());
        assert!(report.skipped, "{path:?} should be skipped");
        assert_eq!(report.nodes_visited, 0);
        assert_eq!(page, before);
    }
}

#[test]
fn substituted_values_are_not_rescanned() {
    let vault = MemoryVault::new().with_file("loop.md", "---\na: \"{{b}}\"\nb: deep\n---\n");
    let mut page = Element::new("div").child(Element::new("p").with_text("{{a}}"));
    post_process(&mut page, "loop.md", &vault);
    assert_eq!(page.text_content(), "{{b}}");
}

#[test]
fn second_pass_is_a_no_op() {
    let vault = vault();
    let mut page = rendered_note();
    post_process(&mut page, "notes/weekly.md", &vault);
    let once = page.clone();

    let report = post_process(&mut page, "notes/weekly.md", &vault);
    assert_eq!(report.nodes_rewritten, 0);
    assert_eq!(page, once);
}
