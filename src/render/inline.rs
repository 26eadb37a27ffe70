//! Inline run rendering and style composition.

use crate::model::{InlineItem, Styles};

use super::escape::push_escaped;

/// Render inline runs in order, concatenated with no separator.
pub fn render_inline(items: &[InlineItem], out: &mut String) {
    for item in items {
        render_item(item, out);
    }
}

fn render_item(item: &InlineItem, out: &mut String) {
    match item {
        InlineItem::Plain(text) => push_escaped(out, text),
        InlineItem::Text { text, styles } => render_styled(text, styles, out),
        InlineItem::Link { href, content } => {
            out.push_str("<a href=\"");
            push_escaped(out, href);
            out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
            push_escaped(out, content);
            out.push_str("</a>");
        }
        InlineItem::Other(_) => {}
    }
}

/// A single style wrapper: opening tag prefix, optional escaped value, and
/// the closing tag.
struct Wrap<'a> {
    open: &'static str,
    value: Option<&'a str>,
    close: &'static str,
}

impl<'a> Wrap<'a> {
    const fn tag(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            value: None,
            close,
        }
    }

    fn span(open: &'static str, value: &'a str) -> Self {
        Self {
            open,
            value: Some(value),
            close: "</span>",
        }
    }
}

/// Wrappers for the set flags, outermost first: bold, italic, underline,
/// strikethrough, code, text colour, background colour.
fn wraps(styles: &Styles) -> Vec<Wrap<'_>> {
    let mut wraps = Vec::new();
    if styles.bold {
        wraps.push(Wrap::tag("<strong>", "</strong>"));
    }
    if styles.italic {
        wraps.push(Wrap::tag("<em>", "</em>"));
    }
    if styles.underline {
        wraps.push(Wrap::tag("<u>", "</u>"));
    }
    if styles.strikethrough {
        wraps.push(Wrap::tag("<s>", "</s>"));
    }
    if styles.code {
        wraps.push(Wrap::tag("<code>", "</code>"));
    }
    if let Some(color) = &styles.text_color {
        wraps.push(Wrap::span("<span style=\"color:", color));
    }
    if let Some(color) = &styles.background_color {
        wraps.push(Wrap::span("<span style=\"background-color:", color));
    }
    wraps
}

fn render_styled(text: &str, styles: &Styles, out: &mut String) {
    let wraps = wraps(styles);

    for wrap in &wraps {
        out.push_str(wrap.open);
        if let Some(value) = wrap.value {
            push_escaped(out, value);
            out.push_str("\">");
        }
    }
    push_escaped(out, text);
    for wrap in wraps.iter().rev() {
        out.push_str(wrap.close);
    }
}
