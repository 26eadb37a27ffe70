//! Core data model for block-tree documents.
//!
//! This module contains:
//! - The document and block tree ([`Document`], [`Block`])
//! - Block type tags with a catch-all for unknown types ([`BlockKind`])
//! - Typed block attributes with open extras ([`BlockProps`])
//! - Inline content runs and their style flags ([`InlineItem`], [`Styles`])
//!
//! Documents arrive as untyped JSON from the editor. Decoding is lenient:
//! a wrong-typed `props`, `content` or `children` field decodes to its
//! default rather than failing, so the renderer can degrade gracefully on
//! anything the structural validator lets through.

mod block;
mod decode;
mod inline;

pub use block::{Block, BlockKind, BlockProps, Document};
pub use inline::{InlineItem, Styles};

pub(crate) use decode::truthy;
