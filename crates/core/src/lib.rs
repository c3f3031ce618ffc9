//! # OutageSync Core
//!
//! Pure business logic for outage synchronization.
//!
//! This crate contains:
//! - The [`ports::OutageApi`] trait implemented by the infrastructure layer
//! - The filter/enrich transforms joining outages to a site's roster
//! - The sequential sync pipeline
//!
//! ## Architecture
//! - Depends only on `outagesync-domain`
//! - No I/O of its own; all network effects happen behind the port trait

pub mod pipeline;
pub mod ports;
pub mod transform;

// Re-export commonly used items
pub use pipeline::{run_sync, SyncReport};
pub use ports::OutageApi;
pub use transform::{attach_device_names_to_outages, filter_outages_by_date_and_device};
