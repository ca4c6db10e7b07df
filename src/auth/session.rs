//! Session token ownership.

use std::sync::{Arc, RwLock};

use crate::traits::{Headers, KeyValueStore};

/// Storage key holding the token; an empty string means "no token".
pub const TOKEN_KEY: &str = "jwt";

/// Owns the authentication token and keeps it in durable storage.
///
/// Cheap to clone; clones share the token. The token is read from storage
/// once in [`Session::restore`] and written back on every change.
#[derive(Clone)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Load the persisted token, if any.
    ///
    /// A store that cannot be read yields a logged-out session.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let token = match store.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read stored session token: {}", e);
                None
            }
        };
        tracing::debug!("Session restored (token present: {})", token.is_some());
        Self {
            token: Arc::new(RwLock::new(token)),
            store,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.read().unwrap_or_else(|e| e.into_inner()).is_some()
    }

    /// Replace the token and persist it. An empty token clears the session.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let next = if token.is_empty() { None } else { Some(token) };
        self.replace(next);
    }

    pub fn clear(&self) {
        self.replace(None);
    }

    fn replace(&self, next: Option<String>) {
        let persisted = next.clone().unwrap_or_default();
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = next;
        if let Err(e) = self.store.set(TOKEN_KEY, &persisted) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    /// Headers sent with every API request.
    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/json; charset=utf-8".to_string(),
        );
        if let Some(token) = self.token() {
            headers.insert("Authorization".to_string(), format!("Token {}", token));
        }
        headers
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}
