//! OutageSync - outage reporting for sites
//!
//! Entry point: builds the default configuration, runs one sync, and logs
//! the outcome. A terminal sync error is logged rather than propagated;
//! the process exits cleanly either way.

use anyhow::Context;
use outagesync_core::run_sync;
use outagesync_domain::{ApiConfig, SyncSettings};
use outagesync_infra::OutageApiClient;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::default();
    let settings = SyncSettings::default();

    let client = OutageApiClient::new(config).context("failed to build API client")?;

    info!(site_id = %settings.site_id, "starting outage sync");
    match run_sync(&client, &settings).await {
        Ok(report) => {
            info!(
                fetched = report.fetched,
                matched = report.matched,
                posted = report.posted,
                "outages have been successfully posted to the site"
            );
        }
        Err(err) => {
            error!(error = %err, "outage sync failed");
        }
    }

    Ok(())
}
