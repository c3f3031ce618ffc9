//! Domain constants
//!
//! Centralized location for the fixed API endpoint details and retry policy
//! defaults. These seed [`crate::config::ApiConfig`] and
//! [`crate::config::SyncSettings`]; nothing outside the config layer should
//! read them directly.

/// Base URL of the monitoring API.
pub const API_BASE_URL: &str = "https://api.krakenflex.systems/interview-tests-mock-api/v1";

/// Static credential sent in the `x-api-key` header on every request.
pub const API_KEY: &str = "EltgJ5G8m44IzwE6UN2Y4B4NjPW77Zk6FJK3lL23";

/// Site whose outages are reported by default.
pub const DEFAULT_SITE_ID: &str = "norwich-pear-tree";

/// Outages beginning before this instant are ignored.
pub const FILTER_DATE: &str = "2022-01-01T00:00:00Z";

// Retry policy
pub const MAX_ATTEMPTS: usize = 3;
pub const RETRY_DELAY_MS: u64 = 1000;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
