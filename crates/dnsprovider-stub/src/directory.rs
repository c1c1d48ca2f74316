// # Stub Zone Directory
//
// In-memory zone directory. Zones are keyed by backend identifier and live
// as long as the directory; there is no removal.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use dnsprovider_core::traits::{ResourceRecordSets, Zone, ZoneSpec, Zones};
use dnsprovider_core::{Error, Result};

use crate::store::StubRecordSets;

/// In-memory zone
///
/// Owns exactly one record set store for its whole lifetime.
#[derive(Debug)]
pub struct StubZone {
    name: String,
    id: String,
    record_sets: Arc<StubRecordSets>,
}

impl StubZone {
    /// Create a zone with an empty record set store
    pub fn new(spec: ZoneSpec) -> Self {
        let record_sets = Arc::new(StubRecordSets::new(spec.name.clone()));
        Self::with_store(spec, record_sets)
    }

    pub(crate) fn with_store(spec: ZoneSpec, record_sets: Arc<StubRecordSets>) -> Self {
        Self {
            name: spec.name,
            id: spec.id,
            record_sets,
        }
    }

    /// The concrete record set store of this zone
    pub fn store(&self) -> &Arc<StubRecordSets> {
        &self.record_sets
    }
}

impl Zone for StubZone {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn resource_record_sets(&self) -> Option<Arc<dyn ResourceRecordSets>> {
        Some(self.record_sets.clone())
    }
}

/// In-memory zone directory
#[derive(Debug, Default)]
pub struct StubZones {
    inner: RwLock<BTreeMap<String, Arc<StubZone>>>,
}

impl StubZones {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_zones(zones: BTreeMap<String, Arc<StubZone>>) -> Self {
        Self {
            inner: RwLock::new(zones),
        }
    }

    /// Look up a zone by backend identifier
    pub async fn get(&self, id: &str) -> Option<Arc<StubZone>> {
        self.inner.read().await.get(id).cloned()
    }

    /// Get the number of zones in the directory
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the directory is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl Zones for StubZones {
    async fn list(&self) -> Result<Vec<Arc<dyn Zone>>> {
        let guard = self.inner.read().await;
        Ok(guard
            .values()
            .map(|zone| zone.clone() as Arc<dyn Zone>)
            .collect())
    }

    async fn create(&self, spec: ZoneSpec) -> Result<Arc<dyn Zone>> {
        check_spec(&spec)?;

        let mut guard = self.inner.write().await;
        match guard.entry(spec.id.clone()) {
            Entry::Occupied(_) => Err(Error::already_exists(format!(
                "zone id {} ({})",
                spec.id, spec.name
            ))),
            Entry::Vacant(entry) => {
                debug!(zone = %spec.name, id = %spec.id, "Creating zone");
                let zone = Arc::new(StubZone::new(spec));
                entry.insert(zone.clone());
                Ok(zone)
            }
        }
    }
}

/// Reject zone parameters no backend could store
pub(crate) fn check_spec(spec: &ZoneSpec) -> Result<()> {
    if spec.name.is_empty() {
        return Err(Error::invalid_input("zone name cannot be empty"));
    }
    if spec.id.is_empty() {
        return Err(Error::invalid_input(format!(
            "zone id cannot be empty for zone {}",
            spec.name
        )));
    }
    Ok(())
}
