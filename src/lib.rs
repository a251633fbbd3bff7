//! `display_props` - front-matter placeholders for document editors
//!
//! Replaces `{{propertyName}}` tokens in a document's body with values from
//! its YAML front matter, in two contexts:
//!
//! - a static pass ([`render::post_process`]) that rewrites rendered text once
//!   per read-mode render;
//! - a live engine ([`LiveEngine`]) that keeps viewport-scoped
//!   replace-decorations over an editable document, and shows the raw token
//!   again while the selection sits inside it.
//!
//! The host editor is reached only through the [`EditorHost`] and
//! [`render::Vault`] traits; [`MemoryEditor`] and [`MemoryVault`] implement
//! them in memory.
//!
//! # Examples
//!
//! ```
//! use display_props::{EngineOptions, LiveEngine, MemoryEditor};
//!
//! let editor = MemoryEditor::new("---\ntitle: Hello\n---\n{{title}} world");
//! let engine = LiveEngine::new(EngineOptions::default(), &editor);
//!
//! let text = "{{title}} world";
//! assert_eq!(engine.decorations().apply(text, 21), "Hello world");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow decoration::DecorationSet etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::must_use_candidate)] // Builders already carry must_use where it matters

pub mod decoration;
pub mod engine;
pub mod error;
pub mod event;
pub mod frontmatter;
pub mod host;
pub mod placeholder;
pub mod render;

// Re-export core types at crate root
pub use decoration::{Decoration, DecorationDiff, DecorationSet, InlineSpan, PropertyWidget};
pub use engine::{EngineOptions, EngineStats, LiveEngine, Policy, UpdateFlags, ViewUpdate};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use frontmatter::{FrontMatter, FrontMatterCache};
pub use host::{DocumentText, EditorHost, MemoryEditor, MemoryVault, Selection};
pub use placeholder::{MatchRecord, PlaceholderToken};
