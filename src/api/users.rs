use serde_json::json;

use super::{ApiClient, StatusGuards};
use crate::error::ConduitResult;
use crate::models::{UserResponse, UserUpdate, UserWithToken};
use crate::traits::Method;

impl ApiClient {
    /// `GET /user`. A rejected token surfaces as `Unauthorized`.
    pub async fn get_user(&self) -> ConduitResult<UserWithToken> {
        let response: UserResponse = self
            .request(Method::Get, "/user", None, StatusGuards::UNAUTHORIZED)
            .await?;
        Ok(response.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> ConduitResult<UserResponse> {
        let body = json!({"user": {"email": email, "password": password}});
        self.request(Method::Post, "/users/login", Some(body), StatusGuards::VALIDATION)
            .await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ConduitResult<UserResponse> {
        let body = json!({"user": {"username": username, "email": email, "password": password}});
        self.request(Method::Post, "/users", Some(body), StatusGuards::VALIDATION)
            .await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> ConduitResult<UserResponse> {
        let body = json!({ "user": update });
        self.request(Method::Put, "/user", Some(body), StatusGuards::VALIDATION)
            .await
    }
}
