//! Block tree to HTML rendering.
//!
//! - [`escape`](escape_html): entity escaping for text and attribute values
//! - [`render`]: per-block dispatch and depth-bounded tree walk
//! - inline runs compose their style wrappers in a fixed order
//!   (bold, italic, underline, strikethrough, code, text colour,
//!   background colour; outermost first) so identical input always
//!   produces byte-identical output
//!
//! ## Design Notes
//!
//! Every raw string, including `href`, media `url`, `caption`, file `name`,
//! code `language` and colour values, is escaped exactly once before it is
//! embedded. Escaping is not sanitizing: callers that display the output in
//! a browser still run it through a dedicated sanitizer.

mod escape;
mod html;
mod inline;

pub use escape::{escape_html, push_escaped};
pub use html::{RenderResult, render, render_json, render_with, render_with_stats};
pub use inline::render_inline;
