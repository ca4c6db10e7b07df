//! Status classification and body decoding shared by every endpoint.

use crate::decode::{decode_from_text, Decode};
use crate::error::{ConduitError, ConduitResult, ValidationBody, ValidationError};
use crate::traits::Response;

/// Which special statuses an endpoint maps to typed errors.
///
/// Statuses not opted into fall through to the generic
/// [`ConduitError::Status`] like any other non-200 answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusGuards {
    pub unauthorized: bool,
    pub validation: bool,
    pub not_found: bool,
}

impl StatusGuards {
    pub const NONE: StatusGuards = StatusGuards {
        unauthorized: false,
        validation: false,
        not_found: false,
    };

    pub const UNAUTHORIZED: StatusGuards = StatusGuards {
        unauthorized: true,
        validation: false,
        not_found: false,
    };

    pub const VALIDATION: StatusGuards = StatusGuards {
        unauthorized: false,
        validation: true,
        not_found: false,
    };

    pub const NOT_FOUND: StatusGuards = StatusGuards {
        unauthorized: false,
        validation: false,
        not_found: true,
    };
}

/// Turn a non-200 response into the matching error.
pub fn check_status(response: &Response, guards: StatusGuards) -> ConduitResult<()> {
    match response.status {
        200 => Ok(()),
        401 if guards.unauthorized => Err(ConduitError::Unauthorized),
        404 if guards.not_found => Err(ConduitError::NotFound),
        422 if guards.validation => {
            let body: ValidationBody = decode_from_text(&response.text())?;
            Err(ValidationError::from(body).into())
        }
        status => Err(ConduitError::status(
            response.url.clone(),
            status,
            response.status_text.clone(),
        )),
    }
}

/// Check the status, then decode the body as `T`.
pub fn decode_response<T: Decode>(response: &Response, guards: StatusGuards) -> ConduitResult<T> {
    check_status(response, guards)?;
    Ok(decode_from_text(&response.text())?)
}
