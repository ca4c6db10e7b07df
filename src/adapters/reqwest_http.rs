//! [`HttpClient`] over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::cli::VERSION;
use crate::traits::{Headers, HttpClient, HttpError, Method, Response};

/// Per-request timeout applied by [`ReqwestHttpClient::new`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to the Conduit backend.
///
/// Every answer, whatever its status, comes back as a [`Response`] carrying
/// the final url and the canonical status text; only failures to get an
/// answer at all are [`HttpError`]s.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// A client identifying as `conduit/<version>` with [`REQUEST_TIMEOUT`].
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!("conduit/{}", VERSION))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to a default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

fn to_http_error(err: reqwest::Error) -> HttpError {
    let message = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(message)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(message)
    } else if err.is_builder() {
        HttpError::InvalidUrl(message)
    } else if err.is_body() || err.is_decode() {
        HttpError::Io(message)
    } else {
        HttpError::Other(message)
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Header names come back lowercased; non-UTF-8 values are skipped.
fn collect_headers(map: &HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let request = headers.iter().fold(
            self.client.request(to_reqwest_method(method), url),
            |request, (name, value)| request.header(name, value),
        );
        let request = match body {
            Some(body) => request.body(body.to_string()),
            None => request,
        };

        let answer = request.send().await.map_err(to_http_error)?;
        let status = answer.status();
        let final_url = answer.url().to_string();
        let answer_headers = collect_headers(answer.headers());
        let bytes = answer.bytes().await.map_err(to_http_error)?;
        tracing::debug!("{} {} -> {}", method, url, status.as_u16());

        Ok(Response::new(status.as_u16(), bytes)
            .with_url(final_url)
            .with_status_text(status.canonical_reason().unwrap_or(""))
            .with_headers(answer_headers))
    }
}
