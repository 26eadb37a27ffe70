//! Structural validation of candidate documents.
//!
//! The validator only checks the outer shape: an array whose elements are
//! objects carrying a non-empty string `type`. Everything below that level
//! (props, content, children) is left to the lenient decoder and the
//! renderer's defaulting, so malformed sub-structure degrades instead of
//! being rejected.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Document;

/// Check that `candidate` is a well-formed block sequence.
///
/// # Examples
///
/// ```
/// use blockdoc::validate;
/// use serde_json::json;
///
/// assert!(validate(&json!([{"type": "paragraph"}])));
/// assert!(validate(&json!([])));
/// assert!(!validate(&json!({"type": "paragraph"})));
/// assert!(!validate(&json!([{"type": ""}])));
/// ```
pub fn validate(candidate: &Value) -> bool {
    check(candidate).is_ok()
}

/// Explain why `candidate` is not a block sequence.
fn check(candidate: &Value) -> std::result::Result<(), String> {
    let Value::Array(items) = candidate else {
        return Err(format!("expected an array of blocks, got {}", kind_name(candidate)));
    };

    for (index, item) in items.iter().enumerate() {
        let Value::Object(map) = item else {
            return Err(format!("block {index} is {}, not an object", kind_name(item)));
        };
        match map.get("type") {
            Some(Value::String(tag)) if !tag.is_empty() => {}
            Some(Value::String(_)) => return Err(format!("block {index} has an empty type")),
            Some(other) => {
                return Err(format!(
                    "block {index} has a {} type, expected a string",
                    kind_name(other)
                ));
            }
            None => return Err(format!("block {index} has no type")),
        }
    }

    Ok(())
}

/// Validate and decode a candidate document.
///
/// A rejection surfaces as [`Error::InvalidContent`] naming the first
/// offending element.
pub fn parse_document(candidate: &Value) -> Result<Document> {
    if let Err(reason) = check(candidate) {
        log::debug!("rejected document: {reason}");
        return Err(Error::InvalidContent(reason));
    }
    Document::from_value(candidate)
        .ok_or_else(|| Error::InvalidContent("expected an array of blocks".to_string()))
}

/// Parse JSON text and validate it as a document.
pub fn parse_document_str(json: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(json)?;
    parse_document(&value)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_arrays() {
        for value in [
            json!(null),
            json!(true),
            json!(1),
            json!("[]"),
            json!({"type": "paragraph"}),
        ] {
            assert!(!validate(&value), "{value} should be rejected");
        }
    }

    #[test]
    fn test_rejects_bad_elements() {
        assert!(!validate(&json!([null])));
        assert!(!validate(&json!(["paragraph"])));
        assert!(!validate(&json!([[{"type": "paragraph"}]])));
        assert!(!validate(&json!([{"type": ""}])));
        assert!(!validate(&json!([{"type": 3}])));
        assert!(!validate(&json!([{"content": ["x"]}])));
        assert!(!validate(&json!([{"type": "paragraph"}, {}])));
    }

    #[test]
    fn test_accepts_without_deep_checks() {
        assert!(validate(&json!([])));
        assert!(validate(&json!([
            {"type": "paragraph", "content": 12, "props": null, "children": "x"},
            {"type": "mystery"}
        ])));
    }

    #[test]
    fn test_parse_document_reports_reason() {
        let err = parse_document(&json!([{"type": "paragraph"}, 7])).unwrap_err();
        match err {
            Error::InvalidContent(reason) => assert_eq!(reason, "block 1 is a number, not an object"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_str() {
        let doc = parse_document_str(r#"[{"type":"paragraph","content":["a"]}]"#).unwrap();
        assert_eq!(doc.len(), 1);
        assert!(matches!(parse_document_str("{"), Err(Error::Json(_))));
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,8}".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn prop_non_array_is_rejected(value in prop_oneof![
            scalar(),
            "[a-z]{1,8}".prop_map(|t| json!({"type": t})),
        ]) {
            prop_assert!(!validate(&value));
        }

        #[test]
        fn prop_typed_objects_are_accepted(
            blocks in prop::collection::vec(("[a-zA-Z]{1,12}", scalar(), scalar()), 0..8)
        ) {
            let value = Value::Array(
                blocks
                    .into_iter()
                    .map(|(tag, content, props)| json!({"type": tag, "content": content, "props": props}))
                    .collect(),
            );
            prop_assert!(validate(&value));
        }
    }
}
