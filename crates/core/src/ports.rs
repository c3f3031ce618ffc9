//! Port interfaces implemented by the infrastructure layer

use async_trait::async_trait;
use outagesync_domain::{Outage, OutageWithDeviceName, Result, SiteInfo};

/// Trait for the three monitoring-API operations the pipeline consumes.
///
/// Implementations own retry and status classification; by the time a call
/// returns, every failure is terminal.
#[async_trait]
pub trait OutageApi: Send + Sync {
    /// Fetch the full outage list.
    async fn get_outages(&self) -> Result<Vec<Outage>>;

    /// Fetch a site's device roster.
    async fn get_site_info(&self, site_id: &str) -> Result<SiteInfo>;

    /// Submit an enriched outage batch for a site.
    async fn post_site_outages(
        &self,
        site_id: &str,
        outages: &[OutageWithDeviceName],
    ) -> Result<()>;
}
