//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - canned HTTP responses, records requests
//! - [`InMemoryStore`] - key-value store backed by a map

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use store::InMemoryStore;
