//! Trait abstractions at the edges of the client.
//!
//! - [`HttpClient`] - HTTP requests against the API
//! - [`KeyValueStore`] - durable storage for the session token

pub mod http;
pub mod storage;

pub use http::{canonical_reason, Headers, HttpClient, HttpError, Method, Response};
pub use storage::{KeyValueStore, StoreError};
