//! Fixtures and helpers for stub provider contract tests
//!
//! Each test builds its own provider and passes it around explicitly;
//! nothing is shared between tests.

#![allow(dead_code)]

use dnsprovider_core::conformance;
use dnsprovider_core::traits::{ResourceRecordSet, ResourceRecordSets, Zone, ZoneSpec};
use dnsprovider_core::{DnsProvider, RrsType};
use dnsprovider_stub::StubProvider;
use std::sync::Arc;

/// A stub provider seeded with the `example.com` zone
pub fn new_fake_provider() -> StubProvider {
    StubProvider::builder()
        .zone(ZoneSpec::new("example.com"))
        .build()
        .expect("seeding a single zone succeeds")
}

/// The first zone of the provider, or panic
pub async fn first_zone(provider: &dyn DnsProvider) -> Arc<dyn Zone> {
    conformance::first_zone(provider)
        .await
        .expect("provider lists at least one zone")
}

/// The record set store of the zone, or panic
pub fn rrs(zone: &dyn Zone) -> Arc<dyn ResourceRecordSets> {
    zone.require_resource_record_sets()
        .expect("zone supports record set management")
}

/// List record sets, or panic
pub async fn list_rrs_or_fail(sets: &dyn ResourceRecordSets) -> Vec<ResourceRecordSet> {
    sets.list().await.expect("listing record sets succeeds")
}

/// Add a record set, or panic
pub async fn add_rrset_or_fail(
    sets: &dyn ResourceRecordSets,
    rrset: ResourceRecordSet,
) -> ResourceRecordSet {
    sets.add(rrset).await.expect("adding record set succeeds")
}

/// Build the sample `www11.<zone>` record set through the store's builder
pub fn example_rrs(zone: &dyn Zone) -> ResourceRecordSet {
    rrs(zone).new_record_set(
        &format!("www11.{}", zone.name()),
        vec!["10.10.10.10".to_string(), "169.20.20.20".to_string()],
        180,
        RrsType::A,
    )
}

/// Build the `www12.<zone>` record set with unvalidated data
pub fn invalid_rrs(zone: &dyn Zone) -> ResourceRecordSet {
    rrs(zone).new_record_set(
        &format!("www12.{}", zone.name()),
        vec!["rubbish".to_string(), "rubbish".to_string()],
        180,
        RrsType::A,
    )
}

/// Count listed record sets with the same (name, type) as `rrset`
pub fn count_key(list: &[ResourceRecordSet], rrset: &ResourceRecordSet) -> usize {
    let key = rrset.key();
    list.iter().filter(|r| r.key() == key).count()
}
