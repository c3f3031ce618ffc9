//! # OutageSync Infrastructure
//!
//! Infrastructure implementation of the core ports.
//!
//! This crate contains:
//! - A retrying HTTP client wrapper over `reqwest`
//! - The monitoring-API client with per-endpoint status classification
//!
//! ## Architecture
//! - Implements traits defined in `outagesync-core`
//! - Contains all "impure" code (network I/O, retry delays)

pub mod api;
pub mod http;

// Re-export commonly used items
pub use api::OutageApiClient;
pub use http::HttpClient;
