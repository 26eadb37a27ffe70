//! HTML renderer - converts a block tree to an HTML string.
//!
//! Walks the document and dispatches on each block's kind. Unknown kinds
//! fall back to a paragraph when they carry inline content and render to
//! nothing otherwise. Recursion into `children` is bounded by
//! [`RenderConfig::max_depth`].
//!
//! # Example
//!
//! ```
//! use blockdoc::{Block, BlockKind, Document, render};
//!
//! let doc = Document::new(vec![
//!     Block::new(BlockKind::Paragraph).with_content(["Hello, World!"]),
//! ]);
//! assert_eq!(render(&doc), "<p>Hello, World!</p>");
//! ```

use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::model::{Block, BlockKind, Document};

use super::escape::push_escaped;
use super::inline::render_inline;

/// Result of HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// The generated HTML.
    pub html: String,
    /// Number of blocks visited, nested ones included.
    pub blocks_rendered: usize,
    /// Number of child subtrees dropped by the depth bound.
    pub truncated: usize,
}

/// Render a document with the default configuration.
pub fn render(document: &Document) -> String {
    render_with(document, &RenderConfig::default())
}

/// Render a document with the given configuration.
pub fn render_with(document: &Document, config: &RenderConfig) -> String {
    render_with_stats(document, config).html
}

/// Render a document and report what was visited and dropped.
pub fn render_with_stats(document: &Document, config: &RenderConfig) -> RenderResult {
    let mut ctx = RenderContext {
        config,
        blocks_rendered: 0,
        truncated: 0,
    };

    let parts = if config.group_lists {
        ctx.render_grouped(&document.blocks)
    } else {
        document.iter().map(|block| ctx.render_block(block, 0)).collect()
    };

    if ctx.truncated > 0 {
        log::warn!(
            "rendering dropped {} subtrees deeper than {}",
            ctx.truncated,
            config.max_depth
        );
    }

    RenderResult {
        html: parts.join(&config.block_separator),
        blocks_rendered: ctx.blocks_rendered,
        truncated: ctx.truncated,
    }
}

/// Render untyped JSON that should already have passed validation.
///
/// A value that is not an array is a rendering fault: it means validation
/// was bypassed upstream.
pub fn render_json(value: &Value, config: &RenderConfig) -> Result<String> {
    let document = Document::from_value(value).ok_or_else(|| {
        Error::Rendering("document is not an array of blocks".to_string())
    })?;
    Ok(render_with(&document, config))
}

/// Context for the render walk.
struct RenderContext<'a> {
    config: &'a RenderConfig,
    blocks_rendered: usize,
    truncated: usize,
}

impl RenderContext<'_> {
    /// Render one block and its permitted descendants.
    fn render_block(&mut self, block: &Block, depth: usize) -> String {
        self.blocks_rendered += 1;

        let mut out = String::new();
        match &block.kind {
            kind if kind.is_list_item() => self.list_item(block, depth, &mut out),
            kind if kind.is_media() => render_media(block, &mut out),
            BlockKind::Paragraph => self.wrap_inline("p", block, &mut out),
            BlockKind::Heading => {
                let level = heading_level(block);
                out.push_str(&format!("<h{level}>"));
                render_inline(block.inline(), &mut out);
                out.push_str(&format!("</h{level}>"));
            }
            BlockKind::Table => {
                out.push_str("<table><tbody>");
                out.push_str(&self.render_children(block, depth).unwrap_or_default());
                out.push_str("</tbody></table>");
            }
            BlockKind::TableRow => {
                out.push_str("<tr>");
                out.push_str(&self.render_children(block, depth).unwrap_or_default());
                out.push_str("</tr>");
            }
            BlockKind::TableCell => self.wrap_inline("td", block, &mut out),
            BlockKind::CodeBlock => {
                let language = block.props.language.as_deref().unwrap_or("plaintext");
                let code = block.inline().first().map(|item| item.plain_text()).unwrap_or("");
                out.push_str("<pre><code class=\"language-");
                push_escaped(&mut out, language);
                out.push_str("\">");
                push_escaped(&mut out, code);
                out.push_str("</code></pre>");
            }
            _ => {
                if block.content.is_some() {
                    self.wrap_inline("p", block, &mut out);
                }
            }
        }
        out
    }

    fn wrap_inline(&self, tag: &str, block: &Block, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        render_inline(block.inline(), out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    /// `<li>`, with a checkbox for checklist items and a nested list when
    /// the item has children within the depth bound.
    fn list_item(&mut self, block: &Block, depth: usize, out: &mut String) {
        out.push_str("<li>");
        if block.kind == BlockKind::CheckListItem {
            if block.props.checked.unwrap_or(false) {
                out.push_str("<input type=\"checkbox\" checked disabled> ");
            } else {
                out.push_str("<input type=\"checkbox\" disabled> ");
            }
        }
        render_inline(block.inline(), out);

        if let Some(nested) = self.render_children(block, depth) {
            let nested_tag = list_tag(&block.kind).unwrap_or("ul");
            out.push('<');
            out.push_str(nested_tag);
            out.push('>');
            out.push_str(&nested);
            out.push_str("</");
            out.push_str(nested_tag);
            out.push('>');
        }
        out.push_str("</li>");
    }

    /// Children concatenated with no separator. `None` when there are no
    /// children or they lie past the depth bound.
    fn render_children(&mut self, block: &Block, depth: usize) -> Option<String> {
        if block.children.is_empty() {
            return None;
        }
        if depth >= self.config.max_depth {
            self.truncated += 1;
            log::debug!(
                "skipping {} children of {} block at depth {depth}",
                block.children.len(),
                block.kind.as_str()
            );
            return None;
        }
        Some(
            block
                .children
                .iter()
                .map(|child| self.render_block(child, depth + 1))
                .collect(),
        )
    }

    /// Top-level rendering with runs of same-kind list items wrapped in a list.
    fn render_grouped(&mut self, blocks: &[Block]) -> Vec<String> {
        let mut parts = Vec::new();
        let mut i = 0;
        while i < blocks.len() {
            let kind = &blocks[i].kind;
            let Some(tag) = list_tag(kind) else {
                parts.push(self.render_block(&blocks[i], 0));
                i += 1;
                continue;
            };

            let mut group = String::new();
            group.push_str(&format!("<{tag}>"));
            while i < blocks.len() && blocks[i].kind == *kind {
                group.push_str(&self.render_block(&blocks[i], 0));
                i += 1;
            }
            group.push_str(&format!("</{tag}>"));
            parts.push(group);
        }
        parts
    }
}

fn list_tag(kind: &BlockKind) -> Option<&'static str> {
    if !kind.is_list_item() {
        None
    } else if *kind == BlockKind::NumberedListItem {
        Some("ol")
    } else {
        Some("ul")
    }
}

/// Heading level from props; absent or zero means 1.
fn heading_level(block: &Block) -> u32 {
    block.props.level.filter(|level| *level != 0).unwrap_or(1)
}

/// Media embeds. A block without a URL renders to nothing.
fn render_media(block: &Block, out: &mut String) {
    let props = &block.props;
    let Some(url) = props.url.as_deref().filter(|u| !u.is_empty()) else {
        return;
    };
    let caption = props.caption.as_deref().filter(|c| !c.is_empty());

    if block.kind == BlockKind::File {
        let label = props
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(caption)
            .unwrap_or(url);
        out.push_str("<a href=\"");
        push_escaped(out, url);
        out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\" download>");
        push_escaped(out, label);
        out.push_str("</a>");
        return;
    }

    if caption.is_some() {
        out.push_str("<figure>");
    }

    match block.kind {
        BlockKind::Image => {
            out.push_str("<img src=\"");
            push_escaped(out, url);
            out.push_str("\" alt=\"");
            push_escaped(out, caption.unwrap_or(""));
            out.push('"');
            push_width(props.width, out);
            out.push('>');
        }
        BlockKind::Video => {
            out.push_str("<video src=\"");
            push_escaped(out, url);
            out.push('"');
            push_width(props.width, out);
            out.push_str(" controls></video>");
        }
        _ => {
            out.push_str("<audio src=\"");
            push_escaped(out, url);
            out.push_str("\" controls></audio>");
        }
    }

    if let Some(caption) = caption {
        out.push_str("<figcaption>");
        push_escaped(out, caption);
        out.push_str("</figcaption></figure>");
    }
}

fn push_width(width: Option<u32>, out: &mut String) {
    if let Some(width) = width {
        out.push_str(&format!(" width=\"{width}\""));
    }
}
