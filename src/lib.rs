//! # blockdoc
//!
//! Content pipeline for block-tree rich documents, the JSON format produced
//! by block-based editors for changelog entries and posts.
//!
//! ## Features
//!
//! - Structural validation of untyped editor JSON
//! - Lenient decoding into a typed block tree
//! - Deterministic HTML rendering with fixed style nesting and full escaping
//! - Plain-text extraction and word-safe excerpts
//! - Title slugs with scope-aware uniqueness and conflict retry
//!
//! ## Quick Start
//!
//! ```
//! use blockdoc::{ContentPipeline, MemorySlugStore};
//! use serde_json::json;
//!
//! let content = json!([
//!     {"type": "heading", "props": {"level": 2}, "content": ["Release Notes"]},
//!     {"type": "paragraph", "content": [
//!         {"type": "text", "text": "Fixed bugs", "styles": {"bold": true}}
//!     ]}
//! ]);
//!
//! let existing = MemorySlugStore::with_slugs(["release-notes"]);
//! let projection = ContentPipeline::new()
//!     .derive(&content, "Release Notes", None, &existing)
//!     .unwrap();
//!
//! assert_eq!(
//!     projection.html_content,
//!     "<h2>Release Notes</h2>\n<p><strong>Fixed bugs</strong></p>"
//! );
//! assert_eq!(projection.excerpt, "Release Notes Fixed bugs");
//! assert_eq!(projection.slug, "release-notes-1");
//! ```
//!
//! ## Working with Documents
//!
//! The individual steps are available on their own:
//!
//! ```
//! use blockdoc::{excerpt, extract_text, parse_document, render};
//! use serde_json::json;
//!
//! let doc = parse_document(&json!([
//!     {"type": "bulletListItem", "content": ["parent"], "children": [
//!         {"type": "bulletListItem", "content": ["child"]}
//!     ]}
//! ])).unwrap();
//!
//! assert_eq!(render(&doc), "<li>parent<ul><li>child</li></ul></li>");
//! assert_eq!(extract_text(&doc), "parent");
//! assert_eq!(excerpt(&doc, 3), "par...");
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod slug;
pub mod text;
pub(crate) mod util;
mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{PipelineConfig, RenderConfig, SlugConfig};
pub use error::{Error, Result};
pub use model::{Block, BlockKind, BlockProps, Document, InlineItem, Styles};
pub use pipeline::{ContentPipeline, Prepared, Projection};
pub use render::{RenderResult, render, render_with, render_with_stats};
pub use slug::{
    MemorySlugStore, Persisted, SlugScope, assign_slug, derive_slug, resolve_unique_slug,
};
pub use text::{excerpt, extract_all_text, extract_text};
pub use validate::{parse_document, parse_document_str, validate};
