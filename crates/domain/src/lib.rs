//! # OutageSync Domain
//!
//! Business domain types and models for OutageSync.
//!
//! This crate contains:
//! - Wire data types (Outage, Device, SiteInfo, OutageWithDeviceName)
//! - Error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other OutageSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{ApiConfig, SyncSettings};
pub use errors::{ApiOperation, Result, SyncError};
pub use types::{Device, Outage, OutageWithDeviceName, SiteInfo};
