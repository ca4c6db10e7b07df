//! Typed client for the Conduit REST API.
//!
//! Each endpoint lives in the submodule for its resource and opts into the
//! status guards it needs (see [`StatusGuards`]). All requests carry the
//! session headers.

mod articles;
mod comments;
pub mod fetch;
mod profiles;
mod tags;
mod users;

pub use articles::ArticleSource;
pub use fetch::{check_status, decode_response, StatusGuards};

use std::sync::Arc;

use serde_json::Value;

use crate::auth::Session;
use crate::decode::Decode;
use crate::error::ConduitResult;
use crate::traits::{HttpClient, Method, Response};

/// Default API root of the public demo backend.
pub const DEFAULT_API_ROOT: &str = "https://api.realworld.io/api";

/// Cheaply cloneable handle shared by all views.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    session: Session,
    api_root: String,
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, session: Session, api_root: impl Into<String>) -> Self {
        let api_root = api_root.into().trim_end_matches('/').to_string();
        Self {
            http,
            session,
            api_root,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ConduitResult<Response> {
        let url = self.url(path);
        let body = body.map(|value| value.to_string());
        let response = self
            .http
            .send(method, &url, body.as_deref(), &self.session.headers())
            .await?;
        if response.status != 200 {
            tracing::debug!("{} {} answered {}", method, url, response.status);
        }
        // Adapters may leave the url blank; error messages need it.
        if response.url.is_empty() {
            Ok(response.with_url(url))
        } else {
            Ok(response)
        }
    }

    /// Send a request and decode a `T` from a 200 answer.
    pub(crate) async fn request<T: Decode>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        guards: StatusGuards,
    ) -> ConduitResult<T> {
        let response = self.send(method, path, body).await?;
        decode_response(&response, guards)
    }

    /// Send a request whose answer body is ignored.
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        guards: StatusGuards,
    ) -> ConduitResult<()> {
        let response = self.send(method, path, None).await?;
        check_status(&response, guards)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_root", &self.api_root)
            .field("session", &self.session)
            .finish()
    }
}

/// Encode one path segment (slug, username).
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::{InMemoryStore, MockHttpClient};

    pub const ROOT: &str = "https://api.test/api";

    pub fn client() -> (ApiClient, MockHttpClient) {
        let http = MockHttpClient::new();
        let session = Session::restore(Arc::new(InMemoryStore::new()));
        (ApiClient::new(Arc::new(http.clone()), session, ROOT), http)
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", ROOT, path)
    }
}
