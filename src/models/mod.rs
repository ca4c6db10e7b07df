//! Records exchanged with the Conduit API.
//!
//! Every record implements [`Decode`](crate::decode::Decode) with a schema
//! mirroring the JSON field names, so responses are structurally validated
//! before serde sees them. Nullable fields (`bio`, `image`) must be present
//! even when `null`.

mod article;
mod comment;
mod profile;
mod responses;
mod user;

pub use article::{Article, ArticleDraft};
pub use comment::Comment;
pub use profile::Profile;
pub use responses::{
    MultiArticlesResponse, MultiCommentsResponse, ProfileResponse, SingleArticleResponse,
    SingleCommentResponse, TagsResponse, UserResponse,
};
pub use user::{User, UserUpdate, UserWithToken};

use chrono::DateTime;

/// Render an API timestamp as e.g. `Mon Jan 01 2018`.
///
/// Unparseable input is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.format("%a %b %d %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2018-01-01T10:00:00.000Z"), "Mon Jan 01 2018");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
