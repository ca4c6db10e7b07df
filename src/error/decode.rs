//! Structural decode failures.

use std::fmt;

/// A JSON payload did not match the expected shape.
///
/// `messages` holds one entry per failing path. `supplied_json` is the raw
/// text that failed, kept verbatim for diagnostics and form error output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub messages: Vec<String>,
    pub supplied_json: String,
}

impl DecodeError {
    pub fn new(messages: Vec<String>, supplied_json: impl Into<String>) -> Self {
        Self {
            messages,
            supplied_json: supplied_json.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decoding JSON failed. \n\nErrors: {} \n\nSuppliedJson: {}",
            self.messages.join(" \n"),
            self.supplied_json
        )
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_message() {
        let err = DecodeError::new(
            vec!["bad a".to_string(), "bad b".to_string()],
            r#"{"a":1}"#,
        );
        assert_eq!(
            err.to_string(),
            "Decoding JSON failed. \n\nErrors: bad a \nbad b \n\nSuppliedJson: {\"a\":1}"
        );
    }

    #[test]
    fn test_new_keeps_raw_text() {
        let err = DecodeError::new(vec![], "{");
        assert_eq!(err.supplied_json, "{");
        assert!(err.messages.is_empty());
    }
}
