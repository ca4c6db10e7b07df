//! Coarse error classification.

use std::fmt;

/// Discriminates [`ConduitError`](super::ConduitError) variants without
/// borrowing their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Payload did not match the expected shape.
    Decode,
    /// Server rejected submitted data (422).
    Validation,
    /// Resource does not exist (404 on opted-in endpoints).
    NotFound,
    /// Token missing or rejected (401 on opted-in endpoints).
    Unauthorized,
    /// Any other non-200 status.
    Status,
    /// The request never produced a response.
    Transport,
}

impl ErrorKind {
    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Decode => "decode",
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Status => "status",
            ErrorKind::Transport => "transport",
        }
    }

    /// Whether the same request may succeed if simply repeated.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Status | ErrorKind::Transport)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
