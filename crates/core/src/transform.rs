//! Pure transforms joining outages to a site's roster
//!
//! No I/O and no failure cases; both functions preserve input order.

use chrono::{DateTime, Utc};
use outagesync_domain::{Outage, OutageWithDeviceName, SiteInfo};

/// Keep the outages that began at or after `cutoff` and belong to a device
/// in the site's roster.
pub fn filter_outages_by_date_and_device(
    outages: Vec<Outage>,
    site_info: &SiteInfo,
    cutoff: DateTime<Utc>,
) -> Vec<Outage> {
    outages
        .into_iter()
        .filter(|outage| {
            outage.begin >= cutoff
                && site_info.devices.iter().any(|device| device.id == outage.id)
        })
        .collect()
}

/// Enrich each outage with the display name of its device.
///
/// Outages with no matching device are silently dropped.
pub fn attach_device_names_to_outages(
    outages: Vec<Outage>,
    site_info: &SiteInfo,
) -> Vec<OutageWithDeviceName> {
    outages
        .into_iter()
        .filter_map(|outage| {
            site_info
                .devices
                .iter()
                .find(|device| device.id == outage.id)
                .map(|device| OutageWithDeviceName::new(outage, device))
        })
        .collect()
}
