//! JSON documents via `serde_json`.

use serde_json::Value;

use super::{DocumentLoader, DocumentNode, Mapping};
use crate::error::Result;

/// Parses JSON text.
///
/// Numbers keep their source digits, so `1.10` stays `1.10` and `1e3` stays `1e3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonLoader;

impl DocumentLoader for JsonLoader {
    fn parse(&self, text: &str) -> Result<DocumentNode> {
        let value: Value = serde_json::from_str(text)?;
        Ok(convert(value))
    }
}

fn convert(value: Value) -> DocumentNode {
    match value {
        Value::Null => DocumentNode::Null,
        Value::Bool(flag) => DocumentNode::Scalar(flag.to_string()),
        Value::Number(number) => DocumentNode::Scalar(number.to_string()),
        Value::String(text) => DocumentNode::Scalar(text),
        Value::Array(items) => DocumentNode::Sequence(items.into_iter().map(convert).collect()),
        Value::Object(entries) => DocumentNode::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect::<Mapping>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryError;

    #[test]
    fn test_parse_nested_object() {
        let root = JsonLoader
            .parse(r#"{"person": {"age": 123, "admin": false, "tags": ["a", "b"]}}"#)
            .unwrap();
        let person = root.as_mapping().unwrap().get("person").unwrap();
        let person = person.as_mapping().unwrap();
        assert_eq!(person.get("age").unwrap().as_scalar(), Some("123"));
        assert_eq!(person.get("admin").unwrap().as_scalar(), Some("false"));
        assert_eq!(
            person.get("tags"),
            Some(&DocumentNode::Sequence(vec![
                DocumentNode::Scalar("a".into()),
                DocumentNode::Scalar("b".into()),
            ]))
        );
    }

    #[test]
    fn test_numbers_keep_source_digits() {
        let root = JsonLoader
            .parse(r#"{"v": 1.10, "big": 18446744073709551616, "exp": 1e3, "list": [1.10, -0.0]}"#)
            .unwrap();
        let root = root.as_mapping().unwrap();
        assert_eq!(root.get("v").unwrap().as_scalar(), Some("1.10"));
        assert_eq!(root.get("big").unwrap().as_scalar(), Some("18446744073709551616"));
        assert_eq!(root.get("exp").unwrap().as_scalar(), Some("1e3"));
        assert_eq!(
            root.get("list"),
            Some(&DocumentNode::Sequence(vec![
                DocumentNode::Scalar("1.10".into()),
                DocumentNode::Scalar("-0.0".into()),
            ]))
        );
    }

    #[test]
    fn test_parse_null() {
        let root = JsonLoader.parse(r#"{"age": null}"#).unwrap();
        assert!(root.as_mapping().unwrap().get("age").unwrap().is_null());
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonLoader.parse("{\"age\": ").unwrap_err();
        assert!(matches!(err, EntryError::Json(_)));
    }
}
