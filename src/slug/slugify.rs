//! Pure slug derivation from titles.

/// Normalize a title into a URL-safe slug.
///
/// Lowercases the title, drops every character other than ASCII letters,
/// digits, whitespace, `_` and `-`, collapses runs of whitespace, `_` and
/// `-` into a single hyphen, and strips leading/trailing hyphens. The
/// result matches `^[a-z0-9-]*$`; an empty result means the title has no
/// usable characters.
///
/// # Examples
///
/// ```
/// use blockdoc::derive_slug;
///
/// assert_eq!(derive_slug("Hello, World! v2.0"), "hello-world-v20");
/// assert_eq!(derive_slug("  Multiple   Spaces  "), "multiple-spaces");
/// assert_eq!(derive_slug("snake_case--and  dashes"), "snake-case-and-dashes");
/// ```
pub fn derive_slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Check that `slug` is non-empty and uses only `a-z`, `0-9` and `-`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
