//! Form submission status and server-side error display.

use std::collections::BTreeMap;

use crate::error::ConduitError;

pub const UNEXPECTED_RESPONSE: &str = "Unexpected server response";
pub const UNEXPECTED_ERROR: &str = "Unexpected Error";

/// Error messages grouped by field name, ready to be listed above a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Convert a failed submission into messages a form can show.
    ///
    /// Validation errors keep their field map. A malformed answer lists the
    /// raw payload followed by the decode messages. Anything else becomes a
    /// single generic entry.
    pub fn from_error(error: &ConduitError) -> Self {
        let mut fields = BTreeMap::new();
        match error {
            ConduitError::Validation(validation) => {
                fields = validation.messages.clone();
            }
            ConduitError::Decode(decode) => {
                let mut messages = vec![decode.supplied_json.clone()];
                messages.extend(decode.messages.iter().cloned());
                fields.insert(UNEXPECTED_RESPONSE.to_string(), messages);
            }
            ConduitError::NotFound
            | ConduitError::Unauthorized
            | ConduitError::Status { .. }
            | ConduitError::Http(_) => {
                fields.insert(UNEXPECTED_ERROR.to_string(), vec![error.to_string()]);
            }
        }
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// One line per field: `"<field> <msg> / <msg>"`.
    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(field, messages)| format!("{} {}", field, messages.join(" / ")))
            .collect()
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Failed(FieldErrors),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            FormStatus::Failed(errors) => Some(errors),
            FormStatus::Editing | FormStatus::Submitting => None,
        }
    }
}

/// The text inputs of one form, addressed by position.
pub trait FieldSet: Clone + Send + 'static {
    fn labels() -> &'static [&'static str];

    fn field(&self, index: usize) -> Option<&str>;

    fn field_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Rendered masked.
    fn is_secret(_index: usize) -> bool {
        false
    }

    /// Enter inserts a newline instead of moving on.
    fn is_multiline(_index: usize) -> bool {
        false
    }
}

/// Values, focused input and submission status of a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState<F> {
    pub fields: F,
    pub focus: usize,
    pub status: FormStatus,
}

impl<F: FieldSet> FormState<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields,
            focus: 0,
            status: FormStatus::Editing,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % F::labels().len().max(1);
    }

    pub fn focus_previous(&mut self) {
        let len = F::labels().len().max(1);
        self.focus = (self.focus + len - 1) % len;
    }

    /// Mutate the focused input.
    pub fn edit_focused(&mut self, f: impl FnOnce(&mut String)) {
        if let Some(field) = self.fields.field_mut(self.focus) {
            f(field);
        }
    }

    pub fn focused_is_multiline(&self) -> bool {
        F::is_multiline(self.focus)
    }
}
