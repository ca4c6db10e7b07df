use super::{segment, ApiClient, StatusGuards};
use crate::error::ConduitResult;
use crate::models::{Profile, ProfileResponse};
use crate::traits::Method;

impl ApiClient {
    pub async fn get_profile(&self, username: &str) -> ConduitResult<Profile> {
        let path = format!("/profiles/{}", segment(username));
        let response: ProfileResponse = self
            .request(Method::Get, &path, None, StatusGuards::NOT_FOUND)
            .await?;
        Ok(response.profile)
    }

    pub async fn follow(&self, username: &str) -> ConduitResult<Profile> {
        let path = format!("/profiles/{}/follow", segment(username));
        let response: ProfileResponse = self
            .request(Method::Post, &path, None, StatusGuards::VALIDATION)
            .await?;
        Ok(response.profile)
    }

    pub async fn unfollow(&self, username: &str) -> ConduitResult<Profile> {
        let path = format!("/profiles/{}/follow", segment(username));
        let response: ProfileResponse = self
            .request(Method::Delete, &path, None, StatusGuards::VALIDATION)
            .await?;
        Ok(response.profile)
    }
}
