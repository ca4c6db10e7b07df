//! Conduit - a terminal client for the Conduit (RealWorld) blogging API.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod decode;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod routes;
pub mod shared;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
