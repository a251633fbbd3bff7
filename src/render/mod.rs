//! Static (read-mode) substitution.
//!
//! Runs once per rendered document view and rewrites text in place; there is
//! no decoration and no interactivity. When the document changes the host
//! renders it again and the pass runs from scratch.

mod node;
mod pass;

pub use node::{Element, Node};
pub use pass::{PassReport, Vault, post_process};
