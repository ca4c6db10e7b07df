//! Server-side form validation failures.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::decode::{Decode, Schema};

/// Field name to the messages the server reported for it.
pub type FieldMessages = BTreeMap<String, Vec<String>>;

/// The server rejected submitted data (HTTP 422).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub messages: FieldMessages,
}

impl ValidationError {
    pub fn new(messages: FieldMessages) -> Self {
        Self { messages }
    }

    /// Convenience for a single field with a single message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut messages = BTreeMap::new();
        messages.insert(field.into(), vec![message.into()]);
        Self { messages }
    }

    /// Messages for one field, empty if the field has none.
    pub fn field(&self, name: &str) -> &[String] {
        self.messages.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .messages
            .iter()
            .map(|(key, messages)| format!("{} {}", key, messages.join(" / ")))
            .collect();
        write!(f, "Validation Errors: \n{}", lines.join(" \n"))
    }
}

impl std::error::Error for ValidationError {}

/// `{"errors": {field: [message]}}` as sent with a 422.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationBody {
    pub errors: FieldMessages,
}

impl Decode for ValidationBody {
    fn schema() -> Schema {
        Schema::object([(
            "errors",
            Schema::dictionary(Schema::array(Schema::String)),
        )])
    }
}

impl From<ValidationBody> for ValidationError {
    fn from(body: ValidationBody) -> Self {
        Self::new(body.errors)
    }
}
