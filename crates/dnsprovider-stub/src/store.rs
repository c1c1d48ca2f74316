// # Stub Record Set Store
//
// In-memory record set store of one zone.
//
// ## Concurrency
//
// Entries live in a BTreeMap behind a tokio RwLock. Every mutation holds the
// write lock across its existence check and its insert/remove, so two
// concurrent adds of the same key cannot both succeed. Lists take the read
// lock and never see a half-applied mutation.
//
// The map is ordered by key only to keep the simulation deterministic.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use dnsprovider_core::traits::{RecordSetKey, ResourceRecordSet, ResourceRecordSets};
use dnsprovider_core::{Error, Result};

/// In-memory record set store
#[derive(Debug, Default)]
pub struct StubRecordSets {
    zone: String,
    inner: RwLock<BTreeMap<RecordSetKey, ResourceRecordSet>>,
}

impl StubRecordSets {
    /// Create an empty store for the named zone
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a store pre-populated with record sets
    ///
    /// Fails with `DuplicateRecord` if two seeds share a (name, type) key.
    pub fn with_records(
        zone: impl Into<String>,
        records: impl IntoIterator<Item = ResourceRecordSet>,
    ) -> Result<Self> {
        let zone = zone.into();
        let mut map = BTreeMap::new();
        for rrset in records {
            match map.entry(rrset.key()) {
                Entry::Occupied(entry) => {
                    return Err(Error::duplicate_record(format!(
                        "{} in zone {}",
                        entry.key(),
                        zone
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(rrset);
                }
            }
        }
        Ok(Self {
            zone,
            inner: RwLock::new(map),
        })
    }

    /// Get the number of record sets in the store
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl ResourceRecordSets for StubRecordSets {
    async fn list(&self) -> Result<Vec<ResourceRecordSet>> {
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }

    async fn add(&self, rrset: ResourceRecordSet) -> Result<ResourceRecordSet> {
        let mut guard = self.inner.write().await;
        match guard.entry(rrset.key()) {
            Entry::Occupied(entry) => {
                debug!(zone = %self.zone, key = %entry.key(), "Rejecting duplicate record set");
                Err(Error::duplicate_record(format!(
                    "{} in zone {}",
                    entry.key(),
                    self.zone
                )))
            }
            Entry::Vacant(entry) => {
                debug!(zone = %self.zone, rrset = %rrset, "Adding record set");
                entry.insert(rrset.clone());
                Ok(rrset)
            }
        }
    }

    async fn remove(&self, rrset: &ResourceRecordSet) -> Result<()> {
        let key = rrset.key();
        let mut guard = self.inner.write().await;
        match guard.remove(&key) {
            Some(removed) => {
                debug!(zone = %self.zone, rrset = %removed, "Removed record set");
                Ok(())
            }
            None => Err(Error::not_found(format!(
                "record set {} in zone {}",
                key, self.zone
            ))),
        }
    }
}
