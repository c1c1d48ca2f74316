//! Test doubles and common utilities for provider contract tests
//!
//! These doubles model backends that lack capabilities, fail at the
//! transport level, or break the record set contract on purpose.

#![allow(dead_code)]

use dnsprovider_core::error::{Error, Result};
use dnsprovider_core::traits::{
    DnsProvider, RecordSetKey, ResourceRecordSet, ResourceRecordSets, Zone, ZoneSpec, Zones,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A provider without zone management
pub struct NoZonesProvider;

impl DnsProvider for NoZonesProvider {
    fn provider_name(&self) -> &'static str {
        "no-zones"
    }

    fn zones(&self) -> Option<Arc<dyn Zones>> {
        None
    }
}

/// A zone directory whose backend cannot be reached
pub struct UnavailableZones {
    /// Call counter for list()
    list_call_count: AtomicUsize,
}

impl UnavailableZones {
    pub fn new() -> Self {
        Self {
            list_call_count: AtomicUsize::new(0),
        }
    }

    /// Get the number of times list() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Zones for UnavailableZones {
    async fn list(&self) -> Result<Vec<Arc<dyn Zone>>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);
        Err(Error::backend_unavailable("connection refused"))
    }

    async fn create(&self, _spec: ZoneSpec) -> Result<Arc<dyn Zone>> {
        Err(Error::backend_unavailable("connection refused"))
    }
}

/// A provider whose zone directory always fails
pub struct UnavailableProvider {
    pub zones: Arc<UnavailableZones>,
}

impl UnavailableProvider {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(UnavailableZones::new()),
        }
    }
}

impl DnsProvider for UnavailableProvider {
    fn provider_name(&self) -> &'static str {
        "unavailable"
    }

    fn zones(&self) -> Option<Arc<dyn Zones>> {
        Some(self.zones.clone())
    }
}

/// A zone handle with a configurable record set store
pub struct FixedZone {
    name: String,
    id: String,
    sets: Option<Arc<dyn ResourceRecordSets>>,
}

impl FixedZone {
    pub fn new(name: &str, sets: Option<Arc<dyn ResourceRecordSets>>) -> Self {
        let spec = ZoneSpec::new(name);
        Self {
            name: spec.name,
            id: spec.id,
            sets,
        }
    }
}

impl Zone for FixedZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn resource_record_sets(&self) -> Option<Arc<dyn ResourceRecordSets>> {
        self.sets.clone()
    }
}

/// A zone directory holding a fixed list of zones
pub struct FixedZones {
    zones: Vec<Arc<dyn Zone>>,
}

#[async_trait::async_trait]
impl Zones for FixedZones {
    async fn list(&self) -> Result<Vec<Arc<dyn Zone>>> {
        Ok(self.zones.clone())
    }

    async fn create(&self, spec: ZoneSpec) -> Result<Arc<dyn Zone>> {
        Err(Error::unsupported(format!(
            "fixed directory cannot create {}",
            spec.id
        )))
    }
}

/// A provider serving a fixed list of zones
pub struct FixedProvider {
    zones: Arc<FixedZones>,
}

impl FixedProvider {
    pub fn new(zones: Vec<Arc<dyn Zone>>) -> Self {
        Self {
            zones: Arc::new(FixedZones { zones }),
        }
    }

    /// A provider with one zone and the given record set store
    pub fn with_zone(name: &str, sets: Option<Arc<dyn ResourceRecordSets>>) -> Self {
        let zone: Arc<dyn Zone> = Arc::new(FixedZone::new(name, sets));
        Self::new(vec![zone])
    }
}

impl DnsProvider for FixedProvider {
    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn zones(&self) -> Option<Arc<dyn Zones>> {
        Some(self.zones.clone())
    }
}

/// How a [`LenientRecordSets`] store breaks the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leniency {
    /// Follows the contract
    Strict,
    /// Duplicate adds overwrite the stored entry
    OverwriteDuplicates,
    /// Removing an absent key succeeds
    IgnoreMissingOnRemove,
    /// Removal requires the full value to match
    RemoveByValue,
    /// Record data that is not an IPv4 address is rejected for A records
    ValidateAddresses,
    /// Follows the contract, but the first remove hits a transient backend failure
    FailFirstRemove,
}

/// A record set store that breaks the contract in one configurable way, or not at all
pub struct LenientRecordSets {
    leniency: Leniency,
    state: Mutex<HashMap<RecordSetKey, ResourceRecordSet>>,
    remove_call_count: AtomicUsize,
}

impl LenientRecordSets {
    pub fn new(leniency: Leniency) -> Self {
        Self {
            leniency,
            state: Mutex::new(HashMap::new()),
            remove_call_count: AtomicUsize::new(0),
        }
    }

    /// Number of stored record sets
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ResourceRecordSets for LenientRecordSets {
    async fn list(&self) -> Result<Vec<ResourceRecordSet>> {
        Ok(self.state.lock().unwrap().values().cloned().collect())
    }

    async fn add(&self, rrset: ResourceRecordSet) -> Result<ResourceRecordSet> {
        if self.leniency == Leniency::ValidateAddresses
            && rrset
                .rrdatas()
                .iter()
                .any(|d| d.parse::<std::net::Ipv4Addr>().is_err())
        {
            return Err(Error::invalid_input(format!("bad address in {}", rrset)));
        }

        let mut state = self.state.lock().unwrap();
        let key = rrset.key();
        if state.contains_key(&key) && self.leniency != Leniency::OverwriteDuplicates {
            return Err(Error::duplicate_record(key.to_string()));
        }
        state.insert(key, rrset.clone());
        Ok(rrset)
    }

    async fn remove(&self, rrset: &ResourceRecordSet) -> Result<()> {
        let calls = self.remove_call_count.fetch_add(1, Ordering::SeqCst);
        if self.leniency == Leniency::FailFirstRemove && calls == 0 {
            return Err(Error::backend_unavailable("connection reset"));
        }

        let mut state = self.state.lock().unwrap();
        let key = rrset.key();

        if self.leniency == Leniency::RemoveByValue && state.get(&key) != Some(rrset) {
            return Err(Error::not_found(key.to_string()));
        }

        match state.remove(&key) {
            Some(_) => Ok(()),
            None if self.leniency == Leniency::IgnoreMissingOnRemove => Ok(()),
            None => Err(Error::not_found(key.to_string())),
        }
    }
}
