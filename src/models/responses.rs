//! Response envelopes, one per endpoint shape.

use serde::{Deserialize, Serialize};

use super::{Article, Comment, Profile, UserWithToken};
use crate::decode::{Decode, Schema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserWithToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleArticleResponse {
    pub article: Article,
}

/// One page of articles plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiArticlesResponse {
    pub articles: Vec<Article>,
    pub articles_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleCommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

impl Decode for UserResponse {
    fn schema() -> Schema {
        Schema::object([("user", UserWithToken::schema())])
    }
}

impl Decode for ProfileResponse {
    fn schema() -> Schema {
        Schema::object([("profile", Profile::schema())])
    }
}

impl Decode for SingleArticleResponse {
    fn schema() -> Schema {
        Schema::object([("article", Article::schema())])
    }
}

impl Decode for MultiArticlesResponse {
    fn schema() -> Schema {
        Schema::object([
            ("articles", Schema::array(Article::schema())),
            ("articlesCount", Schema::Number),
        ])
    }
}

impl Decode for SingleCommentResponse {
    fn schema() -> Schema {
        Schema::object([("comment", Comment::schema())])
    }
}

impl Decode for MultiCommentsResponse {
    fn schema() -> Schema {
        Schema::object([("comments", Schema::array(Comment::schema()))])
    }
}

impl Decode for TagsResponse {
    fn schema() -> Schema {
        Schema::object([("tags", Schema::array(Schema::String))])
    }
}
