//! Inline content runs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::decode::{as_string, truthy};

/// Independently togglable style flags on a text run.
///
/// Absent keys mean "off". Colour values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styles {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
}

impl Styles {
    /// Bold only.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    /// Check whether no style is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let flag = |key: &str| map.get(key).is_some_and(truthy);
        let color = |key: &str| {
            map.get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
            strikethrough: flag("strike") || flag("strikethrough"),
            code: flag("code"),
            text_color: color("textColor"),
            background_color: color("backgroundColor"),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, set) in [
            ("bold", self.bold),
            ("italic", self.italic),
            ("underline", self.underline),
            ("strike", self.strikethrough),
            ("code", self.code),
        ] {
            if set {
                map.insert(key.to_string(), Value::Bool(true));
            }
        }
        if let Some(color) = &self.text_color {
            map.insert("textColor".to_string(), Value::String(color.clone()));
        }
        if let Some(color) = &self.background_color {
            map.insert("backgroundColor".to_string(), Value::String(color.clone()));
        }
        Value::Object(map)
    }
}

/// One run of content inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineItem {
    /// Bare string, no styling.
    Plain(String),
    /// Styled text run.
    Text { text: String, styles: Styles },
    /// Hyperlink with plain display text.
    Link { href: String, content: String },
    /// Any other shape. Kept verbatim, contributes no text or markup.
    Other(Value),
}

impl InlineItem {
    /// Create a styled text run.
    pub fn text(text: impl Into<String>, styles: Styles) -> Self {
        InlineItem::Text {
            text: text.into(),
            styles,
        }
    }

    /// Create a link run.
    pub fn link(href: impl Into<String>, content: impl Into<String>) -> Self {
        InlineItem::Link {
            href: href.into(),
            content: content.into(),
        }
    }

    /// The visible, unstyled text of this run.
    pub fn plain_text(&self) -> &str {
        match self {
            InlineItem::Plain(s) => s,
            InlineItem::Text { text, .. } => text,
            InlineItem::Link { content, .. } => content,
            InlineItem::Other(_) => "",
        }
    }

    /// Decode one inline item, never failing.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => InlineItem::Plain(s.clone()),
            Value::Object(map) => match map.get("type").and_then(Value::as_str) {
                Some("text") => InlineItem::Text {
                    text: map.get("text").and_then(as_string).unwrap_or_default(),
                    styles: map.get("styles").map(Styles::from_value).unwrap_or_default(),
                },
                Some("link") => InlineItem::Link {
                    href: map.get("href").and_then(as_string).unwrap_or_default(),
                    content: map.get("content").map(link_text).unwrap_or_default(),
                },
                _ => InlineItem::Other(value.clone()),
            },
            _ => InlineItem::Other(value.clone()),
        }
    }

    /// Encode back to the editor's JSON shape.
    pub fn to_value(&self) -> Value {
        match self {
            InlineItem::Plain(s) => Value::String(s.clone()),
            InlineItem::Text { text, styles } => serde_json::json!({
                "type": "text",
                "text": text,
                "styles": styles.to_value(),
            }),
            InlineItem::Link { href, content } => serde_json::json!({
                "type": "link",
                "href": href,
                "content": content,
            }),
            InlineItem::Other(value) => value.clone(),
        }
    }
}

impl From<&str> for InlineItem {
    fn from(s: &str) -> Self {
        InlineItem::Plain(s.to_string())
    }
}

/// Link display text may be a string or a nested array of runs.
fn link_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| InlineItem::from_value(item).plain_text().to_string())
            .collect(),
        other => as_string(other).unwrap_or_default(),
    }
}

impl Serialize for InlineItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InlineItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(InlineItem::from_value(&value))
    }
}
