//! Error taxonomy for the Conduit client.
//!
//! | Variant | Produced when |
//! |---------|---------------|
//! | `Decode` | a payload does not match its schema, or is not JSON |
//! | `Validation` | an opted-in endpoint answers 422 |
//! | `NotFound` | an opted-in endpoint answers 404 |
//! | `Unauthorized` | an opted-in endpoint answers 401 |
//! | `Status` | any other non-200 answer |
//! | `Http` | no response at all |

mod conduit_error;
mod decode;
mod kind;
mod validation;

pub use conduit_error::ConduitError;
pub use decode::DecodeError;
pub use kind::ErrorKind;
pub use validation::{FieldMessages, ValidationBody, ValidationError};

/// Result alias used across the API layer.
pub type ConduitResult<T> = Result<T, ConduitError>;
