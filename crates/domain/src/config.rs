//! Configuration structures
//!
//! The endpoint details and retry policy are process-wide constants in
//! [`crate::constants`], but they are threaded through these structs rather
//! than read at call sites so tests can point the client at a mock server
//! and shrink the retry delay to zero.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::constants;

/// Connection and retry policy for the monitoring API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,
    /// Credential sent in the `x-api-key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Total attempt budget per operation (initial try + retries).
    pub max_attempts: usize,
    /// Fixed delay before each retry of an HTTP 500.
    pub retry_delay: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::API_BASE_URL.to_string(),
            api_key: constants::API_KEY.to_string(),
            timeout: Duration::from_secs(constants::REQUEST_TIMEOUT_SECS),
            max_attempts: constants::MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(constants::RETRY_DELAY_MS),
        }
    }
}

/// Parameters of a single sync run.
#[derive(Debug, Clone)]
pub struct SyncSettings {
    /// Site whose outages are reported.
    pub site_id: String,
    /// Outages beginning before this instant are ignored.
    pub cutoff: DateTime<Utc>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            site_id: constants::DEFAULT_SITE_ID.to_string(),
            // The constant is a valid RFC 3339 string; the fallback is
            // unreachable and only satisfies the no-panic policy.
            cutoff: constants::FILTER_DATE.parse().unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}
