//! Plain-text extraction.

use crate::model::{Block, Document};

/// Flatten a document to unstyled text.
///
/// Each top-level block contributes its own inline text; nested `children`
/// are deliberately not visited. Per-block strings are joined with a single
/// space, including blocks that contribute nothing.
///
/// # Examples
///
/// ```
/// use blockdoc::{Block, BlockKind, Document, extract_text};
///
/// let doc = Document::new(vec![
///     Block::new(BlockKind::Heading).with_content(["Release Notes"]),
///     Block::new(BlockKind::Paragraph).with_content(["Fixed bugs"]),
/// ]);
/// assert_eq!(extract_text(&doc), "Release Notes Fixed bugs");
/// ```
pub fn extract_text(document: &Document) -> String {
    document
        .iter()
        .map(block_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of a single block's inline content, ignoring its children.
///
/// Runs are concatenated with no separator; a block without a `content`
/// array yields the empty string.
pub fn block_text(block: &Block) -> String {
    block.inline().iter().map(|item| item.plain_text()).collect()
}

/// Flatten a document including nested children.
///
/// Blocks are visited in pre-order down to `max_depth` (top-level blocks
/// are depth 0). Blocks with no text are skipped rather than leaving
/// doubled spaces.
pub fn extract_all_text(document: &Document, max_depth: usize) -> String {
    let mut parts = Vec::new();
    for block in document {
        collect_text_recursive(block, 0, max_depth, &mut parts);
    }
    parts.join(" ")
}

fn collect_text_recursive(block: &Block, depth: usize, max_depth: usize, parts: &mut Vec<String>) {
    let text = block_text(block);
    if !text.is_empty() {
        parts.push(text);
    }

    if depth >= max_depth {
        if !block.children.is_empty() {
            log::warn!(
                "text extraction stopped at depth {depth}: {} child blocks skipped",
                block.children.len()
            );
        }
        return;
    }

    for child in &block.children {
        collect_text_recursive(child, depth + 1, max_depth, parts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockKind, InlineItem, Styles};
    use serde_json::json;

    fn para(items: Vec<InlineItem>) -> Block {
        Block::new(BlockKind::Paragraph).with_content(items)
    }

    #[test]
    fn test_block_text_mixed_runs() {
        let block = para(vec![
            InlineItem::Plain("See ".into()),
            InlineItem::text("docs", Styles::bold()),
            InlineItem::Plain(" at ".into()),
            InlineItem::link("https://example.com", "example"),
            InlineItem::Other(json!({"type": "mention"})),
        ]);
        assert_eq!(block_text(&block), "See docs at example");
    }

    #[test]
    fn test_block_without_content() {
        assert_eq!(block_text(&Block::new(BlockKind::Table)), "");
    }

    #[test]
    fn test_children_excluded() {
        let doc = Document::new(vec![
            Block::new(BlockKind::BulletListItem)
                .with_content(["parent"])
                .with_child(Block::new(BlockKind::BulletListItem).with_content(["child"])),
        ]);
        assert_eq!(extract_text(&doc), "parent");
    }

    #[test]
    fn test_empty_blocks_still_joined() {
        let doc = Document::new(vec![
            para(vec!["a".into()]),
            Block::new(BlockKind::Image),
            para(vec!["b".into()]),
        ]);
        assert_eq!(extract_text(&doc), "a  b");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_text(&Document::default()), "");
    }

    #[test]
    fn test_extract_all_text_descends() {
        let doc = Document::new(vec![
            Block::new(BlockKind::Table).with_child(
                Block::new(BlockKind::TableRow)
                    .with_child(Block::new(BlockKind::TableCell).with_content(["A1"]))
                    .with_child(Block::new(BlockKind::TableCell).with_content(["B1"])),
            ),
            para(vec!["after".into()]),
        ]);
        assert_eq!(extract_all_text(&doc, 8), "A1 B1 after");
    }

    #[test]
    fn test_extract_all_text_depth_bound() {
        let mut block = Block::new(BlockKind::BulletListItem).with_content(["3"]);
        for label in ["2", "1", "0"] {
            block = Block::new(BlockKind::BulletListItem)
                .with_content([label])
                .with_child(block);
        }
        let doc = Document::new(vec![block]);
        assert_eq!(extract_all_text(&doc, 1), "0 1");
        assert_eq!(extract_all_text(&doc, 0), "0");
        assert_eq!(extract_all_text(&doc, 10), "0 1 2 3");
    }
}
