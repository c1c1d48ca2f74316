// # Resource Record Sets
//
// Defines the record set value and the per-zone store interface.
//
// ## Identity
//
// A record set is identified by its `(name, type)` pair. TTL and record data
// are payload: two record sets with the same name and type collide even when
// their data differs.
//
// ## Usage
//
// ```rust,ignore
// use dnsprovider_core::{RrsType, Zone};
//
// let sets = zone.require_resource_record_sets()?;
// let rrset = sets.new_record_set(
//     "www.example.com",
//     vec!["10.10.10.10".to_string()],
//     180,
//     RrsType::A,
// );
//
// sets.add(rrset.clone()).await?;
// sets.remove(&rrset).await?;
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rrstype::RrsType;

/// Uniqueness key of a record set within a zone
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordSetKey {
    /// Owner name of the record set
    pub name: String,
    /// Record set type
    pub rrs_type: RrsType,
}

impl fmt::Display for RecordSetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rrs_type)
    }
}

/// An immutable DNS resource record set
///
/// Record data is stored exactly as given. Nothing here checks that an `A`
/// record holds an IPv4 address; that is left to backends that care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    name: String,
    #[serde(rename = "type")]
    rrs_type: RrsType,
    ttl: u32,
    rrdatas: Vec<String>,
}

impl ResourceRecordSet {
    /// Build a record set value
    ///
    /// Performs no validation and has no side effects.
    pub fn new<I, S>(name: impl Into<String>, rrdatas: I, ttl: u32, rrs_type: RrsType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            rrs_type,
            ttl,
            rrdatas: rrdatas.into_iter().map(Into::into).collect(),
        }
    }

    /// Owner name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record data, in submission order
    pub fn rrdatas(&self) -> &[String] {
        &self.rrdatas
    }

    /// Time-to-live in seconds
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Record set type
    pub fn rrs_type(&self) -> RrsType {
        self.rrs_type
    }

    /// The `(name, type)` identity of this record set
    pub fn key(&self) -> RecordSetKey {
        RecordSetKey {
            name: self.name.clone(),
            rrs_type: self.rrs_type,
        }
    }
}

impl fmt::Display for ResourceRecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.name,
            self.ttl,
            self.rrs_type,
            self.rrdatas.join(", ")
        )
    }
}

/// Trait for the record set store of a single zone
///
/// # Uniqueness
///
/// No two record sets in a store may share a `(name, type)` key. Backends
/// must enforce this at the mutation boundary, not leave it to callers.
///
/// # Thread Safety
///
/// Mutations on one zone must be serialized. Concurrent `add` calls for the
/// same key must leave exactly one winner; the others fail with
/// [`Error::DuplicateRecord`](crate::Error::DuplicateRecord). `list` may run
/// concurrently with other reads but must never observe a partial write.
///
/// # Atomicity
///
/// `add` and `remove` either fully succeed or leave the store unchanged.
///
/// # Retries
///
/// None. A network-backed implementation returns
/// [`Error::BackendUnavailable`](crate::Error::BackendUnavailable) and lets the
/// caller decide.
#[async_trait]
pub trait ResourceRecordSets: Send + Sync {
    /// List every record set currently in the zone
    ///
    /// Reflects all prior successful `add` and `remove` calls. Order is
    /// unspecified. An empty zone yields an empty vector, not an error.
    async fn list(&self) -> Result<Vec<ResourceRecordSet>, crate::Error>;

    /// Build a record set value for this zone
    ///
    /// Pure builder: performs no existence check and never fails.
    fn new_record_set(
        &self,
        name: &str,
        rrdatas: Vec<String>,
        ttl: u32,
        rrs_type: RrsType,
    ) -> ResourceRecordSet {
        ResourceRecordSet::new(name, rrdatas, ttl, rrs_type)
    }

    /// Add a record set to the zone
    ///
    /// # Returns
    ///
    /// - `Ok(ResourceRecordSet)`: The stored record set, identical to the input
    /// - `Err(Error::DuplicateRecord)`: The `(name, type)` key is already taken;
    ///   the stored entry is left untouched
    async fn add(&self, rrset: ResourceRecordSet) -> Result<ResourceRecordSet, crate::Error>;

    /// Remove a record set from the zone
    ///
    /// Matching is done on `(name, type)` only. A record set whose TTL or data
    /// differ from the stored entry still removes it.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The entry was deleted
    /// - `Err(Error::NotFound)`: No entry with that key exists
    async fn remove(&self, rrset: &ResourceRecordSet) -> Result<(), crate::Error>;
}
