//! Read-mode substitution over rendered output.

use super::node::Element;
use crate::error::Result;
use crate::event::{EVENT_STATIC_PASS, LogLevel, emit_event, emit_log};
use crate::frontmatter;
use crate::placeholder::substitute;
use std::borrow::Cow;

/// Read access to source documents by path.
pub trait Vault {
    /// Read the text of the document at `source_path`.
    ///
    /// Paths that do not name a file fail with
    /// [`Error::NotAFile`](crate::Error::NotAFile).
    fn read(&self, source_path: &str) -> Result<String>;
}

/// Outcome of one static pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Leaf text elements inspected.
    pub nodes_visited: usize,
    /// Leaf text elements whose text changed.
    pub nodes_rewritten: usize,
    /// The source could not be read, so nothing was touched.
    pub skipped: bool,
}

/// Replace resolved placeholders in the rendered `container`.
///
/// Front matter is read once from the document at `source_path`. Every
/// descendant element whose only child is a single text run gets its text
/// rewritten; elements with mixed or element children are left alone, as is
/// the container itself. Unresolved tokens stay literal. When the source
/// cannot be read the pass is skipped entirely.
///
/// # Examples
///
/// ```
/// use display_props::render::{Element, post_process};
/// use display_props::MemoryVault;
///
/// let vault = MemoryVault::new().with_file("a.md", "---\ntitle: Hello\n---\n{{title}} world");
/// let mut page = Element::new("div").child(Element::new("p").with_text("{{title}} world"));
/// let report = post_process(&mut page, "a.md", &vault);
/// assert_eq!(report.nodes_rewritten, 1);
/// assert_eq!(page.text_content(), "Hello world");
/// ```
pub fn post_process<V: Vault + ?Sized>(
    container: &mut Element,
    source_path: &str,
    vault: &V,
) -> PassReport {
    let text = match vault.read(source_path) {
        Ok(text) => text,
        Err(e) => {
            emit_log(LogLevel::Debug, &format!("static pass skipped: {e}"));
            return PassReport {
                skipped: true,
                ..PassReport::default()
            };
        }
    };
    let props = frontmatter::extract(&text);

    let mut report = PassReport::default();
    container.for_each_descendant_mut(&mut |element| {
        let Some(leaf) = element.leaf_text_mut() else {
            return;
        };
        report.nodes_visited += 1;
        let rewritten = match substitute(leaf, &props) {
            Cow::Owned(text) if text != *leaf => text,
            _ => return,
        };
        *leaf = rewritten;
        report.nodes_rewritten += 1;
    });

    emit_event(
        EVENT_STATIC_PASS,
        &format!(
            "{{\"visited\":{},\"rewritten\":{}}}",
            report.nodes_visited, report.nodes_rewritten
        ),
    );
    report
}
