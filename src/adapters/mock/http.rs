//! Mock HTTP client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Method, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Request body parsed as JSON, `Null` when absent or not JSON.
    pub fn json(&self) -> serde_json::Value {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// Any status with a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }

    /// Any status with a raw text body.
    pub fn text(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string()))
    }
}

/// HTTP client returning canned responses.
///
/// Responses are looked up by method and exact URL, then by URL alone, then
/// by URL prefix, and finally the default. Every request is recorded.
///
/// # Example
///
/// ```ignore
/// use conduit::adapters::mock::{MockHttpClient, MockResponse};
/// use conduit::traits::{HttpClient, Headers, Method};
/// use serde_json::json;
///
/// let client = MockHttpClient::new();
/// client.set_response(Method::Get, "https://api.test/api/tags", MockResponse::json(200, json!({"tags": []})));
///
/// let response = client.get("https://api.test/api/tags", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests()[0].url, "https://api.test/api/tags");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    by_method: Arc<Mutex<HashMap<(Method, String), MockResponse>>>,
    by_url: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `method url` exactly.
    pub fn set_response(&self, method: Method, url: &str, response: MockResponse) {
        lock(&self.by_method).insert((method, url.to_string()), response);
    }

    /// Respond to any method on `url`, or on URLs starting with it.
    pub fn set_url_response(&self, url: &str, response: MockResponse) {
        lock(&self.by_url).insert(url.to_string(), response);
    }

    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn find_response(&self, method: Method, url: &str) -> Option<MockResponse> {
        if let Some(response) = lock(&self.by_method).get(&(method, url.to_string())) {
            return Some(response.clone());
        }

        let by_url = lock(&self.by_url);
        if let Some(response) = by_url.get(url) {
            return Some(response.clone());
        }
        // Longest prefix wins so more specific patterns override general ones.
        let prefix_match = by_url
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });

        match self.find_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response.with_url(url)),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_method_specific_response() {
        let client = MockHttpClient::new();
        client.set_response(Method::Post, "https://x/a", MockResponse::json(200, json!({"ok": 1})));
        client.set_response(Method::Delete, "https://x/a", MockResponse::text(500, ""));

        let post = client.post("https://x/a", "{}", &Headers::new()).await.unwrap();
        let delete = client.delete("https://x/a", &Headers::new()).await.unwrap();
        assert_eq!(post.status, 200);
        assert_eq!(delete.status, 500);
        assert_eq!(post.url, "https://x/a");
    }

    #[tokio::test]
    async fn test_url_prefix_and_default() {
        let client = MockHttpClient::new();
        client.set_url_response("https://x/articles", MockResponse::text(200, "list"));
        client.set_url_response("https://x/articles/feed", MockResponse::text(200, "feed"));
        client.set_default_response(MockResponse::text(404, ""));

        let feed = client.get("https://x/articles/feed?limit=10", &Headers::new()).await.unwrap();
        let list = client.get("https://x/articles?limit=10", &Headers::new()).await.unwrap();
        let other = client.get("https://x/tags", &Headers::new()).await.unwrap();
        assert_eq!(feed.text(), "feed");
        assert_eq!(list.text(), "list");
        assert_eq!(other.status, 404);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::text(200, "{}"));
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Token t".to_string());

        client.put("https://x/user", r#"{"user":{}}"#, &headers).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].json(), json!({"user": {}}));
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Token t".to_string())
        );
        client.clear_requests();
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_is_an_error() {
        let client = MockHttpClient::new();
        let result = client.get("https://x/none", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_error_response() {
        let client = MockHttpClient::new();
        client.set_url_response("https://x", MockResponse::Error(HttpError::Timeout("5s".into())));
        let result = client.get("https://x/tags", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("5s".into()));
    }
}
