//! Monitoring-API client
//!
//! Implements the `OutageApi` port over the retrying [`crate::http::HttpClient`],
//! applying the per-endpoint status classification tables.

pub mod client;

pub use client::OutageApiClient;
