//! API client for the outage endpoints
//!
//! Wraps each of the three operations in the retrying
//! [`HttpClient`](crate::http::HttpClient) and classifies non-200 statuses
//! into the [`SyncError`] taxonomy. The three endpoints share the 403/429
//! rows of the classification table; only the site-scoped ones have a 404
//! case.

use async_trait::async_trait;
use outagesync_core::ports::OutageApi;
use outagesync_domain::{
    ApiConfig, ApiOperation, Outage, OutageWithDeviceName, Result, SiteInfo, SyncError,
};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, instrument};

use crate::http::HttpClient;

/// Header carrying the static API credential.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the monitoring API's outage endpoints.
pub struct OutageApiClient {
    http: HttpClient,
    config: ApiConfig,
}

impl OutageApiClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if the API key is not a valid header
    /// value or the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|err| SyncError::Config(format!("invalid API key: {err}")))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .max_attempts(config.max_attempts)
            .retry_delay(config.retry_delay)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    /// Send the request and classify anything other than a 200.
    async fn execute(
        &self,
        operation: ApiOperation,
        builder: RequestBuilder,
    ) -> Result<Response> {
        let response = self.http.send(builder).await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }
        Err(self.classify(status, operation))
    }

    fn classify(&self, status: StatusCode, operation: ApiOperation) -> SyncError {
        match status {
            StatusCode::FORBIDDEN => SyncError::AccessDenied,
            StatusCode::NOT_FOUND => match operation.site_id() {
                Some(site_id) => SyncError::SiteNotFound(site_id.to_string()),
                // The outage list has no 404 case.
                None => SyncError::UnexpectedStatus(status.as_u16()),
            },
            StatusCode::TOO_MANY_REQUESTS => SyncError::RateLimited,
            // HttpClient only hands back a 500 once the attempt budget is
            // spent, so at this point every attempt failed with one.
            StatusCode::INTERNAL_SERVER_ERROR => SyncError::RetriesExhausted {
                attempts: self.config.max_attempts,
                operation,
            },
            other => SyncError::UnexpectedStatus(other.as_u16()),
        }
    }
}

#[async_trait]
impl OutageApi for OutageApiClient {
    #[instrument(skip(self))]
    async fn get_outages(&self) -> Result<Vec<Outage>> {
        let url = format!("{}/outages", self.config.base_url);
        debug!(%url, "fetching outages");

        let response = self
            .execute(ApiOperation::FetchOutages, self.http.request(Method::GET, &url))
            .await?;

        response.json().await.map_err(|err| SyncError::InvalidBody(err.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_site_info(&self, site_id: &str) -> Result<SiteInfo> {
        let url = format!("{}/site-info/{site_id}", self.config.base_url);
        debug!(%url, "fetching site info");

        let operation = ApiOperation::FetchSiteInfo { site_id: site_id.to_string() };
        let response = self.execute(operation, self.http.request(Method::GET, &url)).await?;

        response.json().await.map_err(|err| SyncError::InvalidBody(err.to_string()))
    }

    #[instrument(skip(self, outages), fields(count = outages.len()))]
    async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[OutageWithDeviceName],
    ) -> Result<()> {
        let url = format!("{}/site-outages/{site_id}", self.config.base_url);
        debug!(%url, "posting site outages");

        let operation = ApiOperation::PostSiteOutages { site_id: site_id.to_string() };
        let builder = self.http.request(Method::POST, &url).json(&outages);
        self.execute(operation, builder).await?;

        Ok(())
    }
}
