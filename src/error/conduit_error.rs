//! The error type returned by every API operation.

use thiserror::Error;

use super::decode::DecodeError;
use super::kind::ErrorKind;
use super::validation::ValidationError;
use crate::traits::HttpError;

/// Failure of a request against the Conduit API.
///
/// Plain data: callers discriminate with `match` (or [`kind`](Self::kind))
/// and render with `Display`.
#[derive(Debug, Clone, Error)]
pub enum ConduitError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not Found")]
    NotFound,

    #[error("Not Authorized")]
    Unauthorized,

    #[error("{url} => {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ConduitError {
    pub fn status(url: impl Into<String>, status: u16, status_text: impl Into<String>) -> Self {
        ConduitError::Status {
            url: url.into(),
            status,
            status_text: status_text.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConduitError::Decode(_) => ErrorKind::Decode,
            ConduitError::Validation(_) => ErrorKind::Validation,
            ConduitError::NotFound => ErrorKind::NotFound,
            ConduitError::Unauthorized => ErrorKind::Unauthorized,
            ConduitError::Status { .. } => ErrorKind::Status,
            ConduitError::Http(_) => ErrorKind::Transport,
        }
    }

    /// One-line text suitable for a notification or status bar.
    pub fn user_message(&self) -> String {
        match self {
            ConduitError::Decode(_) => "Unexpected server response".to_string(),
            ConduitError::Validation(err) => err
                .messages
                .iter()
                .map(|(field, messages)| format!("{} {}", field, messages.join(" / ")))
                .collect::<Vec<_>>()
                .join(", "),
            ConduitError::Http(err) => format!("Network problem: {}", err),
            other => other.to_string(),
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ConduitError::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            ConduitError::Decode(err) => Some(err),
            _ => None,
        }
    }
}
