//! HTML escaping.
//!
//! Applied exactly once to every raw string embedded in markup, both text
//! content and attribute values.

/// Escape special HTML characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entity references.
///
/// # Examples
///
/// ```
/// use blockdoc::render::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#39;s");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 10);
    push_escaped(&mut result, s);
    result
}

/// Append the escaped form of `s` to `out`.
pub fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
