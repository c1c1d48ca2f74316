//! Core traits for the DNS provider abstraction
//!
//! This module defines the abstract interfaces that all backends must follow.
//!
//! - [`DnsProvider`]: Capability discovery and access to zones
//! - [`Zones`] / [`Zone`]: Zone directory and per-zone handle
//! - [`ResourceRecordSets`]: Record set store of one zone

pub mod provider;
pub mod record_sets;
pub mod zones;

pub use provider::{DnsProvider, DnsProviderFactory};
pub use record_sets::{RecordSetKey, ResourceRecordSet, ResourceRecordSets};
pub use zones::{Zone, ZoneSpec, Zones};
