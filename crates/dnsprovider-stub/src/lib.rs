// # Stub DNS Provider
//
// In-memory reference backend for dnsprovider-core.
//
// Every layer of the provider contract is implemented in process memory:
// no network, no persistence across restarts. Given the same sequence of
// calls, a real backend must produce the same errors and the same list
// contents as this one, modulo ordering and latency.
//
// ## Uses
//
// - Test double for code written against the provider traits
// - Oracle for the `dnsprovider_core::conformance` checks
// - Default backend of the demo binary
//
// ## Seeding
//
// Zones (and their record sets) can be seeded before the provider is handed
// out, either through [`StubProviderBuilder`] or a `ProviderConfig::Stub`.
// Seeding is fixture scaffolding, not part of the provider contract.
//
// ## Example
//
// ```rust,ignore
// use dnsprovider_core::{DnsProvider, ZoneSpec};
// use dnsprovider_stub::StubProvider;
//
// let provider = StubProvider::builder()
//     .zone(ZoneSpec::new("example.com"))
//     .build()?;
//
// let zones = provider.require_zones()?;
// assert_eq!(zones.list().await?.len(), 1);
// ```

pub mod directory;
pub mod store;

use std::collections::BTreeMap;
use std::sync::Arc;

use dnsprovider_core::config::{ProviderConfig, ZoneConfig};
use dnsprovider_core::registry::ProviderRegistry;
use dnsprovider_core::traits::{
    DnsProvider, DnsProviderFactory, ResourceRecordSet, ZoneSpec, Zones,
};
use dnsprovider_core::{Error, Result};

pub use directory::{StubZone, StubZones};
pub use store::StubRecordSets;

/// Registry name of the stub provider
pub const PROVIDER_NAME: &str = "stub";

/// In-memory DNS provider
///
/// Cloning is cheap and yields a handle to the same directory.
#[derive(Debug, Clone, Default)]
pub struct StubProvider {
    zones: Arc<StubZones>,
}

impl StubProvider {
    /// Create a provider with no zones
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a seeded provider
    pub fn builder() -> StubProviderBuilder {
        StubProviderBuilder::default()
    }

    /// Create a provider from a `ProviderConfig::Stub`
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        match config {
            ProviderConfig::Stub { zones } => {
                config.validate()?;
                zones
                    .iter()
                    .fold(Self::builder(), |builder, zone| builder.zone_config(zone))
                    .build()
            }
            other => Err(Error::config(format!(
                "Stub provider cannot be built from {} configuration",
                other.type_name()
            ))),
        }
    }

    /// The concrete zone directory, for fixture setup and inspection
    pub fn stub_zones(&self) -> &Arc<StubZones> {
        &self.zones
    }
}

impl DnsProvider for StubProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn zones(&self) -> Option<Arc<dyn Zones>> {
        Some(self.zones.clone())
    }
}

/// Builder for a [`StubProvider`] with seeded zones
#[derive(Debug, Default)]
pub struct StubProviderBuilder {
    zones: Vec<(ZoneSpec, Vec<ResourceRecordSet>)>,
}

impl StubProviderBuilder {
    /// Seed an empty zone
    pub fn zone(self, spec: ZoneSpec) -> Self {
        self.zone_with_records(spec, Vec::new())
    }

    /// Seed a zone with record sets
    pub fn zone_with_records(
        mut self,
        spec: ZoneSpec,
        records: impl IntoIterator<Item = ResourceRecordSet>,
    ) -> Self {
        self.zones.push((spec, records.into_iter().collect()));
        self
    }

    /// Seed a zone described by configuration
    pub fn zone_config(self, zone: &ZoneConfig) -> Self {
        let records = zone.records.iter().map(|r| r.to_record_set());
        self.zone_with_records(zone.spec(), records)
    }

    /// Build the provider
    ///
    /// # Returns
    ///
    /// - `Ok(StubProvider)`: All seeds applied
    /// - `Err(Error::InvalidInput)`: A seeded zone has an empty name or id
    /// - `Err(Error::AlreadyExists)`: Two seeded zones share a backend id
    /// - `Err(Error::DuplicateRecord)`: A zone was seeded with two record sets
    ///   sharing a (name, type) key
    pub fn build(self) -> Result<StubProvider> {
        let mut zones = BTreeMap::new();
        for (spec, records) in self.zones {
            directory::check_spec(&spec)?;
            if zones.contains_key(&spec.id) {
                return Err(Error::already_exists(format!(
                    "zone id {} ({})",
                    spec.id, spec.name
                )));
            }
            let store = Arc::new(StubRecordSets::with_records(spec.name.clone(), records)?);
            tracing::debug!(zone = %spec.name, id = %spec.id, "Seeding zone");
            zones.insert(spec.id.clone(), Arc::new(StubZone::with_store(spec, store)));
        }

        Ok(StubProvider {
            zones: Arc::new(StubZones::from_zones(zones)),
        })
    }
}

/// Factory creating [`StubProvider`] instances from configuration
#[derive(Debug, Default)]
pub struct StubProviderFactory;

impl DnsProviderFactory for StubProviderFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn DnsProvider>> {
        Ok(Box::new(StubProvider::from_config(config)?))
    }
}

/// Register the stub provider with a registry
pub fn register(registry: &ProviderRegistry) {
    registry.register_provider(PROVIDER_NAME, Box::new(StubProviderFactory));
}
