//! Sequential sync pipeline
//!
//! One run is an ordered sequence of fallible steps: fetch outages, fetch
//! the site roster, filter, enrich, post. The first terminal error aborts
//! the remainder; there is no partial-success state for the POST step.

use outagesync_domain::{Result, SyncSettings};
use tracing::info;

use crate::ports::OutageApi;
use crate::transform::{attach_device_names_to_outages, filter_outages_by_date_and_device};

/// Counts produced by a completed sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Outages returned by the monitoring API.
    pub fetched: usize,
    /// Outages surviving the date/device filter.
    pub matched: usize,
    /// Enriched outages submitted to the site endpoint.
    pub posted: usize,
}

/// Run one outage sync for the configured site.
pub async fn run_sync<A>(api: &A, settings: &SyncSettings) -> Result<SyncReport>
where
    A: OutageApi + ?Sized,
{
    let outages = api.get_outages().await?;
    info!(count = outages.len(), "fetched all outages");

    let site_info = api.get_site_info(&settings.site_id).await?;
    info!(site_id = %site_info.id, devices = site_info.devices.len(), "fetched site information");

    let fetched = outages.len();
    let filtered = filter_outages_by_date_and_device(outages, &site_info, settings.cutoff);
    info!(count = filtered.len(), cutoff = %settings.cutoff, "filtered outages by start date and device IDs");

    let matched = filtered.len();
    let enriched = attach_device_names_to_outages(filtered, &site_info);
    info!(count = enriched.len(), "attached device names to outages");

    api.post_site_outages(&settings.site_id, &enriched).await?;
    info!(site_id = %settings.site_id, count = enriched.len(), "posted outages to site");

    Ok(SyncReport { fetched, matched, posted: enriched.len() })
}
