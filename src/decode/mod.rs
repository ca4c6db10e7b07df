//! Decode-validated JSON parsing.
//!
//! Untyped payloads from the network are validated against a [`Schema`]
//! before they become typed values. Failures are returned as
//! [`DecodeError`] values carrying every failing path plus the raw text,
//! never panics or silent defaults.

pub mod schema;

pub use schema::Schema;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// A type that can be decoded from JSON after structural validation.
pub trait Decode: DeserializeOwned {
    fn schema() -> Schema;
}

/// Validate `value` against `T`'s schema and convert it.
pub fn decode_sync<T: Decode>(value: &Value) -> Result<T, DecodeError> {
    let errors = T::schema().validate(value);
    if !errors.is_empty() {
        return Err(DecodeError::new(errors, value.to_string()));
    }
    // Schema-valid payloads can still be out of range for the Rust type,
    // e.g. a fractional number for an integer id.
    T::deserialize(value).map_err(|e| DecodeError::new(vec![e.to_string()], value.to_string()))
}

/// Parse `text` as JSON, then [`decode_sync`] it.
///
/// Malformed JSON is reported as a [`DecodeError`] whose `supplied_json` is
/// the original text.
pub fn decode_from_text<T: Decode>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| DecodeError::new(vec![format!("Invalid JSON: {}", e)], text.to_string()))?;
    let errors = T::schema().validate(&value);
    if !errors.is_empty() {
        return Err(DecodeError::new(errors, text.to_string()));
    }
    T::deserialize(&value).map_err(|e| DecodeError::new(vec![e.to_string()], text.to_string()))
}

/// Deferred form of [`decode_sync`] for composing with request futures.
pub async fn decode_async<T: Decode>(value: Value) -> Result<T, DecodeError> {
    decode_sync(&value)
}

/// Deferred form of [`decode_from_text`].
pub async fn decode_from_text_async<T: Decode>(text: String) -> Result<T, DecodeError> {
    decode_from_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        name: String,
        uses: u32,
    }

    impl Decode for Tag {
        fn schema() -> Schema {
            Schema::object([("name", Schema::String), ("uses", Schema::Number)])
        }
    }

    #[test]
    fn test_decode_sync_success() {
        let tag: Tag = decode_sync(&json!({"name": "rust", "uses": 3})).unwrap();
        assert_eq!(tag, Tag { name: "rust".into(), uses: 3 });
    }

    #[test]
    fn test_decode_sync_mismatch_carries_raw_json() {
        let value = json!({"name": 1});
        let err = decode_sync::<Tag>(&value).unwrap_err();
        assert_eq!(err.messages.len(), 2);
        assert_eq!(err.supplied_json, value.to_string());
    }

    #[test]
    fn test_decode_sync_out_of_range_number() {
        let err = decode_sync::<Tag>(&json!({"name": "x", "uses": -4})).unwrap_err();
        assert_eq!(err.messages.len(), 1);
    }

    #[test]
    fn test_decode_from_text_round_trip() {
        let tag = Tag { name: "serde".into(), uses: 12 };
        let text = serde_json::to_string(&tag).unwrap();
        let decoded: Tag = decode_from_text(&text).unwrap();
        assert_eq!(decoded, tag);
    }

    #[test]
    fn test_decode_from_text_malformed_json() {
        let err = decode_from_text::<Tag>("{").unwrap_err();
        assert_eq!(err.supplied_json, "{");
        assert!(err.messages[0].starts_with("Invalid JSON"));
    }

    #[test]
    fn test_decode_from_text_keeps_original_text() {
        let text = r#"{ "name": "spaced" }"#;
        let err = decode_from_text::<Tag>(text).unwrap_err();
        assert_eq!(err.supplied_json, text);
        assert!(err.messages[0].contains("uses"));
    }

    #[tokio::test]
    async fn test_decode_async_variants() {
        let ok: Tag = decode_async(json!({"name": "a", "uses": 1})).await.unwrap();
        assert_eq!(ok.name, "a");
        let err = decode_from_text_async::<Tag>("[]".to_string()).await.unwrap_err();
        assert!(err.messages[0].contains("<root>"));
    }
}
