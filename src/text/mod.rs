//! Plain-text projections of a document.
//!
//! - [`extract_text`]: top-level block text, space-joined (children excluded)
//! - [`extract_all_text`]: depth-bounded walk including children, for indexing
//! - [`excerpt`]: bounded-length, word-safe summary built on `extract_text`
//!
//! Lengths are counted in Unicode scalar values, never bytes, so truncation
//! cannot split a character.

mod excerpt;
mod extract;

pub use excerpt::{ELLIPSIS, excerpt, excerpt_text};
pub use extract::{block_text, extract_all_text, extract_text};
