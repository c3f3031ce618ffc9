//! Error types used throughout the application
//!
//! Every failure of a sync run surfaces as a [`SyncError`]. Only the
//! HTTP 500 path is absorbed internally by the retry loop; everything here
//! is terminal once constructed.

use std::fmt;

use thiserror::Error;

/// Main error type for OutageSync
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The API rejected the credential (HTTP 403).
    #[error("Access denied")]
    AccessDenied,

    /// The site-scoped resource does not exist (HTTP 404).
    #[error("Site with ID {0} not found")]
    SiteNotFound(String),

    /// The API throttled the caller (HTTP 429).
    #[error("Too many requests")]
    RateLimited,

    /// A status outside the classification table was returned.
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatus(u16),

    /// No HTTP response was obtained (connection refused, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// Every attempt returned HTTP 500.
    #[error("Reached max retries ({attempts}) {operation}")]
    RetriesExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
        /// The operation that exhausted its budget.
        operation: ApiOperation,
    },

    /// A 200 response carried a body that did not match the wire schema.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// Client construction or configuration failure.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for OutageSync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Identifies which API operation an error arose from.
///
/// Carries the site ID for the site-scoped operations so that 404 and
/// retry-exhaustion messages can name the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    /// `GET /outages`
    FetchOutages,
    /// `GET /site-info/{site_id}`
    FetchSiteInfo {
        /// Site whose roster is being fetched.
        site_id: String,
    },
    /// `POST /site-outages/{site_id}`
    PostSiteOutages {
        /// Site the enriched outages are reported to.
        site_id: String,
    },
}

impl ApiOperation {
    /// Site ID for site-scoped operations; `None` for the outage list.
    pub fn site_id(&self) -> Option<&str> {
        match self {
            Self::FetchOutages => None,
            Self::FetchSiteInfo { site_id } | Self::PostSiteOutages { site_id } => Some(site_id),
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchOutages => write!(f, "for fetching outages"),
            Self::FetchSiteInfo { .. } => write!(f, "for fetching site info"),
            Self::PostSiteOutages { site_id } => {
                write!(f, "to post site outages for {site_id}")
            }
        }
    }
}
