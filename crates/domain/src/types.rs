//! Wire data types exchanged with the monitoring API
//!
//! All entities are created fresh per run from network responses and
//! transforms, never mutated after creation, and discarded at process end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded interval during which a device was unavailable.
///
/// `begin`/`end` are UTC instants; the wire format is RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outage {
    /// Identifier of the affected device.
    pub id: String,
    /// Start of the outage interval.
    pub begin: DateTime<Utc>,
    /// End of the outage interval.
    pub end: DateTime<Utc>,
}

/// A device belonging to a site's roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// Identifier, unique within the site.
    pub id: String,
    /// Human-readable label.
    pub name: String,
}

/// One site's device roster at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    /// Site identifier.
    pub id: String,
    /// Site display name.
    pub name: String,
    /// Roster; device IDs are unique within the sequence.
    pub devices: Vec<Device>,
}

/// An [`Outage`] enriched with the display name of its device.
///
/// Constructed only for outages whose `id` matches a device in the site's
/// roster; `name` always equals that device's `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutageWithDeviceName {
    /// Identifier of the affected device.
    pub id: String,
    /// Device display name, copied from the roster.
    pub name: String,
    /// Start of the outage interval.
    pub begin: DateTime<Utc>,
    /// End of the outage interval.
    pub end: DateTime<Utc>,
}

impl OutageWithDeviceName {
    /// Join an outage with the roster device it belongs to.
    pub fn new(outage: Outage, device: &Device) -> Self {
        Self {
            id: outage.id,
            name: device.name.clone(),
            begin: outage.begin,
            end: outage.end,
        }
    }
}
