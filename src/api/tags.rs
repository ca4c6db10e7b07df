use super::{ApiClient, StatusGuards};
use crate::error::ConduitResult;
use crate::models::TagsResponse;
use crate::traits::Method;

impl ApiClient {
    pub async fn list_tags(&self) -> ConduitResult<Vec<String>> {
        let response: TagsResponse = self
            .request(Method::Get, "/tags", None, StatusGuards::NONE)
            .await?;
        Ok(response.tags)
    }
}
