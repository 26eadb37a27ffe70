//! Word-safe excerpt truncation.

use crate::model::Document;

use super::extract::extract_text;

/// Suffix appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Generate a bounded summary of a document.
///
/// The result is at most `max_length + 3` characters long, and equals
/// [`extract_text`] whenever that already fits.
///
/// # Examples
///
/// ```
/// use blockdoc::{Block, BlockKind, Document, excerpt};
///
/// let doc = Document::new(vec![
///     Block::new(BlockKind::Paragraph).with_content(["The quick brown fox jumps"]),
/// ]);
/// assert_eq!(excerpt(&doc, 200), "The quick brown fox jumps");
/// assert_eq!(excerpt(&doc, 20), "The quick brown fox...");
/// ```
pub fn excerpt(document: &Document, max_length: usize) -> String {
    excerpt_text(&extract_text(document), max_length)
}

/// Truncate already-extracted text.
///
/// Cuts at the last space inside the first `max_length` characters when
/// that space sits at or beyond 80% of `max_length`; otherwise cuts at
/// exactly `max_length`, accepting a mid-word break.
pub fn excerpt_text(text: &str, max_length: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_length) else {
        return text.to_string();
    };

    let slice = &text[..cut];
    if let Some(space) = slice.rfind(' ') {
        let space_chars = slice[..space].chars().count();
        // 5 * idx >= 4 * max is idx >= 0.8 * max without floats
        if space_chars * 5 >= max_length * 4 {
            return format!("{}{ELLIPSIS}", &slice[..space]);
        }
    }

    format!("{slice}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BlockKind};
    use proptest::prelude::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(excerpt_text("hello", 5), "hello");
        assert_eq!(excerpt_text("", 0), "");
    }

    #[test]
    fn test_cut_at_late_space() {
        // slice "aaaaaaaa b" (10 chars), last space at 8 >= 8
        assert_eq!(excerpt_text("aaaaaaaa bbbb", 10), "aaaaaaaa...");
    }

    #[test]
    fn test_early_space_cuts_mid_word() {
        // last space at 3 < 8, so keep the full 10 characters
        assert_eq!(excerpt_text("abc defghijklmnop", 10), "abc defghi...");
    }

    #[test]
    fn test_no_space_cuts_mid_word() {
        assert_eq!(excerpt_text("abcdefghijkl", 5), "abcde...");
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(excerpt_text("abc", 0), "...");
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "héllo wörld ünïcode";
        let out = excerpt_text(text, 12);
        assert_eq!(out, "héllo wörld...");
        assert!(out.chars().count() <= 15);
    }

    #[test]
    fn test_excerpt_uses_top_level_text() {
        let doc = Document::new(vec![
            Block::new(BlockKind::Heading).with_content(["Release Notes"]),
            Block::new(BlockKind::Paragraph).with_content(["Fixed bugs"]),
        ]);
        assert_eq!(excerpt(&doc, 200), "Release Notes Fixed bugs");
        assert_eq!(excerpt(&doc, 20), "Release Notes Fixed...");
        assert_eq!(excerpt(&doc, 16), "Release Notes...");
        assert_eq!(excerpt(&doc, 17), "Release Notes Fix...");
    }

    proptest! {
        #[test]
        fn prop_excerpt_length_bound(text in "[a-z ]{0,300}", max in 1usize..250) {
            let out = excerpt_text(&text, max);
            prop_assert!(out.chars().count() <= max + 3);
        }

        #[test]
        fn prop_excerpt_identity_when_short(text in "\\PC{0,50}", extra in 0usize..20) {
            let max = text.chars().count() + extra;
            prop_assert_eq!(excerpt_text(&text, max), text);
        }

        #[test]
        fn prop_truncated_excerpt_is_prefix(text in "[a-z ]{20,120}", max in 1usize..20) {
            let out = excerpt_text(&text, max);
            prop_assert!(out.ends_with(ELLIPSIS));
            let body = out.strip_suffix(ELLIPSIS).unwrap();
            prop_assert!(text.starts_with(body));
        }
    }
}
