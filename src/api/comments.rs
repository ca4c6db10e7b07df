use serde_json::json;

use super::{segment, ApiClient, StatusGuards};
use crate::error::ConduitResult;
use crate::models::{Comment, MultiCommentsResponse, SingleCommentResponse};
use crate::traits::Method;

impl ApiClient {
    pub async fn list_comments(&self, slug: &str) -> ConduitResult<Vec<Comment>> {
        let path = format!("/articles/{}/comments", segment(slug));
        let response: MultiCommentsResponse = self
            .request(Method::Get, &path, None, StatusGuards::NONE)
            .await?;
        Ok(response.comments)
    }

    pub async fn create_comment(&self, slug: &str, body: &str) -> ConduitResult<Comment> {
        let path = format!("/articles/{}/comments", segment(slug));
        let payload = json!({"comment": {"body": body}});
        let response: SingleCommentResponse = self
            .request(Method::Post, &path, Some(payload), StatusGuards::VALIDATION)
            .await?;
        Ok(response.comment)
    }

    pub async fn delete_comment(&self, slug: &str, id: u64) -> ConduitResult<()> {
        let path = format!("/articles/{}/comments/{}", segment(slug), id);
        self.request_empty(Method::Delete, &path, StatusGuards::NONE)
            .await
    }
}
