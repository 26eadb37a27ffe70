//! Block tree node types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::decode::{as_string, as_u32, truthy};
use super::inline::InlineItem;

/// Block type tag, selecting rendering behavior.
///
/// The set is open: any tag the editor emits that is not listed here
/// decodes to [`BlockKind::Other`] and renders through the fallback arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Paragraph (`<p>`).
    Paragraph,
    /// Heading; level in `props.level`, default 1.
    Heading,
    /// Bulleted list item (`<li>`, nested children in `<ul>`).
    BulletListItem,
    /// Numbered list item (`<li>`, nested children in `<ol>`).
    NumberedListItem,
    /// Checklist item with a disabled checkbox; state in `props.checked`.
    CheckListItem,
    /// Table container; rows are its children.
    Table,
    /// Table row; cells are its children.
    TableRow,
    /// Table cell with inline content.
    TableCell,
    /// Preformatted code; language in `props.language`.
    CodeBlock,
    Image,
    Video,
    Audio,
    File,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl BlockKind {
    /// Map an editor type tag to a kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => BlockKind::Paragraph,
            "heading" => BlockKind::Heading,
            "bulletListItem" => BlockKind::BulletListItem,
            "numberedListItem" => BlockKind::NumberedListItem,
            "checkListItem" => BlockKind::CheckListItem,
            "table" => BlockKind::Table,
            "tableRow" => BlockKind::TableRow,
            "tableCell" => BlockKind::TableCell,
            "codeBlock" => BlockKind::CodeBlock,
            "image" => BlockKind::Image,
            "video" => BlockKind::Video,
            "audio" => BlockKind::Audio,
            "file" => BlockKind::File,
            other => BlockKind::Other(other.to_string()),
        }
    }

    /// The editor type tag.
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::BulletListItem => "bulletListItem",
            BlockKind::NumberedListItem => "numberedListItem",
            BlockKind::CheckListItem => "checkListItem",
            BlockKind::Table => "table",
            BlockKind::TableRow => "tableRow",
            BlockKind::TableCell => "tableCell",
            BlockKind::CodeBlock => "codeBlock",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Audio => "audio",
            BlockKind::File => "file",
            BlockKind::Other(tag) => tag,
        }
    }

    /// Check if this is one of the three list item kinds.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockKind::BulletListItem | BlockKind::NumberedListItem | BlockKind::CheckListItem
        )
    }

    /// Check if this is a media embed (image, video, audio, file).
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            BlockKind::Image | BlockKind::Video | BlockKind::Audio | BlockKind::File
        )
    }
}

/// Block-specific attributes.
///
/// Every field is optional; the renderer picks a per-type default when a
/// key is absent. Keys that are unknown, or whose values could not be
/// decoded into the typed field, are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockProps {
    /// Heading level (default 1).
    pub level: Option<u32>,
    /// Checklist state, decoded by JSON truthiness (default unchecked).
    pub checked: Option<bool>,
    /// Code block language (default `plaintext`).
    pub language: Option<String>,
    /// Media source URL.
    pub url: Option<String>,
    /// Media caption.
    pub caption: Option<String>,
    /// File display name.
    pub name: Option<String>,
    /// Media display width in pixels.
    pub width: Option<u32>,
    pub extra: Map<String, Value>,
}

impl BlockProps {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = value else {
            return Self::default();
        };

        let mut props = Self::default();
        for (key, value) in map {
            let consumed = match key.as_str() {
                "level" => set(&mut props.level, as_u32(value)),
                "checked" => set(&mut props.checked, Some(truthy(value))),
                "language" => set(&mut props.language, as_string(value)),
                "url" => set(&mut props.url, as_string(value)),
                "caption" => set(&mut props.caption, as_string(value)),
                "name" => set(&mut props.name, as_string(value)),
                "width" => set(&mut props.width, as_u32(value)),
                _ => false,
            };
            if !consumed {
                props.extra.insert(key.clone(), value.clone());
            }
        }
        props
    }

    fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        if let Some(level) = self.level {
            map.insert("level".into(), level.into());
        }
        if let Some(checked) = self.checked {
            map.insert("checked".into(), checked.into());
        }
        for (key, field) in [
            ("language", &self.language),
            ("url", &self.url),
            ("caption", &self.caption),
            ("name", &self.name),
        ] {
            if let Some(v) = field {
                map.insert(key.into(), Value::String(v.clone()));
            }
        }
        if let Some(width) = self.width {
            map.insert("width".into(), width.into());
        }
        Value::Object(map)
    }

    /// Get an untyped prop that has no dedicated field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn set<T>(slot: &mut Option<T>, decoded: Option<T>) -> bool {
    let ok = decoded.is_some();
    if ok {
        *slot = decoded;
    }
    ok
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Editor-assigned identifier, if any.
    pub id: Option<String>,
    pub kind: BlockKind,
    pub props: BlockProps,
    /// Inline runs. `None` for containers and for blocks whose `content`
    /// field was absent or not an array.
    pub content: Option<Vec<InlineItem>>,
    pub children: Vec<Block>,
}

impl Block {
    /// Create a block of the given kind with no props, content or children.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: None,
            kind,
            props: BlockProps::default(),
            content: None,
            children: Vec::new(),
        }
    }

    /// Set the inline content.
    pub fn with_content<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InlineItem>,
    {
        self.content = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Set the props.
    pub fn with_props(mut self, props: BlockProps) -> Self {
        self.props = props;
        self
    }

    /// Append a child block.
    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    /// Inline content, or an empty slice.
    pub fn inline(&self) -> &[InlineItem] {
        self.content.as_deref().unwrap_or(&[])
    }

    /// Decode a block leniently.
    ///
    /// Returns `None` only when `value` is not an object. A missing or
    /// non-string `type` decodes to `BlockKind::Other("")`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        let kind = map
            .get("type")
            .and_then(Value::as_str)
            .map(BlockKind::from_tag)
            .unwrap_or_else(|| BlockKind::Other(String::new()));

        let content = match map.get("content") {
            Some(Value::Array(items)) => Some(items.iter().map(InlineItem::from_value).collect()),
            _ => None,
        };

        let children = match map.get("children") {
            Some(Value::Array(items)) => items.iter().filter_map(Block::from_value).collect(),
            _ => Vec::new(),
        };

        Some(Self {
            id: map.get("id").and_then(as_string),
            kind,
            props: BlockProps::from_value(map.get("props")),
            content,
            children,
        })
    }

    /// Encode back to the editor's JSON shape.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert("id".into(), Value::String(id.clone()));
        }
        map.insert("type".into(), Value::String(self.kind.as_str().to_string()));
        map.insert("props".into(), self.props.to_value());
        if let Some(content) = &self.content {
            map.insert(
                "content".into(),
                Value::Array(content.iter().map(InlineItem::to_value).collect()),
            );
        }
        map.insert(
            "children".into(),
            Value::Array(self.children.iter().map(Block::to_value).collect()),
        );
        Value::Object(map)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Block::from_value(&value).ok_or_else(|| serde::de::Error::custom("block must be an object"))
    }
}

/// An ordered sequence of top-level blocks.
///
/// The document is owned by the caller; this crate only derives values
/// from it and never mutates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Decode a document leniently. Non-object elements are skipped.
    ///
    /// Returns `None` when `value` is not an array.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Array(items) = value else {
            return None;
        };
        Some(Self::new(items.iter().filter_map(Block::from_value).collect()))
    }

    pub fn to_value(&self) -> Value {
        Value::Array(self.blocks.iter().map(Block::to_value).collect())
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.blocks.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Document::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("document must be an array of blocks"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags_round_trip() {
        for tag in [
            "paragraph",
            "heading",
            "bulletListItem",
            "numberedListItem",
            "checkListItem",
            "table",
            "tableRow",
            "tableCell",
            "codeBlock",
            "image",
            "video",
            "audio",
            "file",
            "callout",
        ] {
            assert_eq!(BlockKind::from_tag(tag).as_str(), tag);
        }
        assert_eq!(
            BlockKind::from_tag("callout"),
            BlockKind::Other("callout".into())
        );
    }

    #[test]
    fn test_decode_heading() {
        let block = Block::from_value(&json!({
            "id": "b1",
            "type": "heading",
            "props": {"level": 2, "textAlignment": "left"},
            "content": ["Release Notes"],
            "children": []
        }))
        .unwrap();

        assert_eq!(block.id.as_deref(), Some("b1"));
        assert_eq!(block.kind, BlockKind::Heading);
        assert_eq!(block.props.level, Some(2));
        assert_eq!(block.props.get("textAlignment"), Some(&json!("left")));
        assert_eq!(block.inline(), &[InlineItem::Plain("Release Notes".into())]);
    }

    #[test]
    fn test_decode_malformed_fields_default() {
        let block = Block::from_value(&json!({
            "type": "paragraph",
            "props": "nope",
            "content": "not an array",
            "children": {"also": "wrong"}
        }))
        .unwrap();

        assert_eq!(block.props, BlockProps::default());
        assert_eq!(block.content, None);
        assert!(block.children.is_empty());
    }

    #[test]
    fn test_undecodable_prop_kept_in_extra() {
        let block = Block::from_value(&json!({
            "type": "heading",
            "props": {"level": "huge"}
        }))
        .unwrap();
        assert_eq!(block.props.level, None);
        assert_eq!(block.props.get("level"), Some(&json!("huge")));
    }

    #[test]
    fn test_decode_skips_non_object_children() {
        let block = Block::from_value(&json!({
            "type": "bulletListItem",
            "children": [null, 3, {"type": "bulletListItem"}]
        }))
        .unwrap();
        assert_eq!(block.children.len(), 1);
    }

    #[test]
    fn test_checked_uses_truthiness() {
        let checked = |value: Value| {
            Block::from_value(&json!({"type": "checkListItem", "props": {"checked": value}}))
                .unwrap()
                .props
                .checked
        };
        assert_eq!(checked(json!(true)), Some(true));
        assert_eq!(checked(json!(1)), Some(true));
        assert_eq!(checked(json!("yes")), Some(true));
        assert_eq!(checked(json!(0)), Some(false));
        assert_eq!(checked(json!("")), Some(false));
        assert_eq!(checked(Value::Null), Some(false));
    }

    #[test]
    fn test_missing_type_decodes_to_other() {
        let block = Block::from_value(&json!({"content": ["x"]})).unwrap();
        assert_eq!(block.kind, BlockKind::Other(String::new()));
    }

    #[test]
    fn test_document_serde() {
        let raw = json!([
            {"type": "paragraph", "props": {}, "content": ["hi"], "children": []}
        ]);
        let doc: Document = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);

        assert!(serde_json::from_value::<Document>(json!({"type": "paragraph"})).is_err());
    }

    #[test]
    fn test_builder() {
        let block = Block::new(BlockKind::BulletListItem)
            .with_content(["parent"])
            .with_child(Block::new(BlockKind::BulletListItem).with_content(["child"]));
        assert_eq!(block.children.len(), 1);
        assert_eq!(block.inline()[0].plain_text(), "parent");
        assert!(block.kind.is_list_item());
        assert!(BlockKind::Video.is_media());
    }
}
