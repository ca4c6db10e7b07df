//! Shared helpers for integration tests.
//!
//! Two ways to build an [`ApiClient`]:
//! - [`server_client`] talks to a local wiremock server through the real
//!   reqwest adapter
//! - [`mock_context`] uses the in-process [`MockHttpClient`]

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use conduit::adapters::{InMemoryStore, MockHttpClient, ReqwestHttpClient};
use conduit::api::ApiClient;
use conduit::auth::Session;
use conduit::context::AppContext;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const MOCK_ROOT: &str = "https://api.test/api";

/// A session backed by memory, optionally holding `token`.
pub fn session(token: Option<&str>) -> Session {
    let session = Session::restore(Arc::new(InMemoryStore::new()));
    if let Some(token) = token {
        session.set_token(token);
    }
    session
}

/// Start a wiremock server and a client rooted at `<server>/api`.
pub async fn server_client(token: Option<&str>) -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(
        Arc::new(ReqwestHttpClient::new()),
        session(token),
        format!("{}/api", server.uri()),
    );
    (server, client)
}

/// A context over [`MockHttpClient`] rooted at [`MOCK_ROOT`].
pub fn mock_context() -> (AppContext, MockHttpClient) {
    let http = MockHttpClient::new();
    let api = ApiClient::new(Arc::new(http.clone()), session(None), MOCK_ROOT);
    (AppContext::new(api), http)
}

pub fn mock_url(path: &str) -> String {
    format!("{}{}", MOCK_ROOT, path)
}

/// Collects every notification fired on `ctx`.
pub fn record_notifications(ctx: &AppContext) -> Arc<Mutex<Vec<String>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    ctx.notifications
        .add_listener(move |message: &String| sink.lock().unwrap().push(message.clone()));
    seen
}

pub fn profile_json(username: &str, following: bool) -> Value {
    json!({"username": username, "bio": null, "image": null, "following": following})
}

pub fn article_json(slug: &str, favorited: bool, count: u32) -> Value {
    json!({
        "slug": slug,
        "title": format!("Title {}", slug),
        "description": "desc",
        "body": "body",
        "tagList": ["rust"],
        "createdAt": "2018-01-01T10:00:00.000Z",
        "updatedAt": "2018-01-01T10:00:00.000Z",
        "favorited": favorited,
        "favoritesCount": count,
        "author": profile_json("jake", false)
    })
}

pub fn user_json(username: &str, token: &str) -> Value {
    json!({"user": {
        "email": format!("{}@example.com", username),
        "token": token,
        "username": username,
        "bio": null,
        "image": null
    }})
}
