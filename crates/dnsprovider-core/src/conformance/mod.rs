//! Provider contract conformance checks
//!
//! Every backend must behave like the in-memory reference backend: same
//! errors, same list contents, modulo ordering and latency. The checks in
//! this module drive a provider through the record set lifecycle and fail
//! with [`Error::ContractViolation`] when it strays.
//!
//! The provider under test is passed in explicitly. Checks that add record
//! sets remove them again before returning, whatever the outcome, so they can
//! run back to back against the same zone.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let provider = dnsprovider_stub::StubProvider::builder()
//!     .zone(ZoneSpec::new("example.com"))
//!     .build()?;
//!
//! let report = dnsprovider_core::conformance::run(&provider).await?;
//! println!("{} checks passed", report.passed.len());
//! ```

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::rrstype::RrsType;
use crate::traits::{
    DnsProvider, RecordSetKey, ResourceRecordSet, ResourceRecordSets, Zone, ZoneSpec, Zones,
};

/// TTL used by the sample record sets
pub const EXAMPLE_TTL: u32 = 180;

/// Outcome of a full conformance run
#[derive(Debug, Clone)]
pub struct ContractReport {
    /// Name of the provider under test
    pub provider: &'static str,
    /// Zone the record set checks ran against
    pub zone: String,
    /// Names of the checks that passed, in execution order
    pub passed: Vec<&'static str>,
}

/// A well-formed `A` record set named `www11.<zone>`
pub fn example_record_set(zone: &dyn Zone) -> ResourceRecordSet {
    ResourceRecordSet::new(
        format!("www11.{}", zone.name()),
        ["10.10.10.10", "169.20.20.20"],
        EXAMPLE_TTL,
        RrsType::A,
    )
}

/// An `A` record set named `www12.<zone>` whose data is not an address
pub fn invalid_record_set(zone: &dyn Zone) -> ResourceRecordSet {
    ResourceRecordSet::new(
        format!("www12.{}", zone.name()),
        ["rubbish", "rubbish"],
        EXAMPLE_TTL,
        RrsType::A,
    )
}

/// Return the first zone of the provider's account
///
/// Fails with [`Error::Unsupported`] when the provider has no zone directory
/// and with [`Error::ContractViolation`] when the directory is empty.
pub async fn first_zone(provider: &dyn DnsProvider) -> Result<Arc<dyn Zone>> {
    debug!(provider = provider.provider_name(), "Getting zones");
    let zones = provider.require_zones()?;

    let list = zones.list().await?;
    debug!("Got {} zone(s)", list.len());

    list.into_iter().next().ok_or_else(|| {
        Error::contract_violation(format!(
            "zone listing of provider {} returned no zones, expected at least 1",
            provider.provider_name()
        ))
    })
}

/// Verify that zone listing succeeds and returns at least one zone
pub async fn check_zones_list(provider: &dyn DnsProvider) -> Result<()> {
    first_zone(provider).await.map(|_| ())
}

/// Verify that listing the record sets of a zone succeeds
pub async fn check_list_record_sets(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let list = sets.list().await?;
    debug!(zone = zone.name(), "Got {} record set(s)", list.len());
    Ok(())
}

/// Verify that an added record set is listed verbatim
pub async fn check_add_visible(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    let added = sets.add(rrset.clone()).await?;
    let outcome = async {
        if added != rrset {
            return Err(Error::contract_violation(format!(
                "add returned {} for submitted {}",
                added, rrset
            )));
        }
        expect_listed_once(sets.as_ref(), &rrset).await
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that adding an existing (name, type) key fails without overwriting
pub async fn check_add_duplicate_rejected(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    sets.add(rrset.clone()).await?;
    let outcome = async {
        expect_duplicate(sets.add(rrset.clone()).await, &rrset)?;

        // Same key, different payload: still a duplicate, and no overwrite.
        let variant = ResourceRecordSet::new(rrset.name(), ["192.0.2.1"], 60, rrset.rrs_type());
        expect_duplicate(sets.add(variant).await, &rrset)?;

        expect_listed_once(sets.as_ref(), &rrset).await
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that a removed record set is no longer listed
pub async fn check_remove_gone(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    let added = sets.add(rrset.clone()).await?;
    let outcome = async {
        if let Err(e) = sets.remove(&added).await {
            return Err(Error::contract_violation(format!(
                "failed to remove record set {} after adding: {}",
                rrset, e
            )));
        }
        expect_absent(sets.as_ref(), &rrset.key()).await
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that removing the same record set twice fails with `NotFound`
pub async fn check_remove_twice_not_found(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    sets.add(rrset.clone()).await?;
    let outcome = async {
        sets.remove(&rrset).await?;

        match sets.remove(&rrset).await {
            Err(Error::NotFound(_)) => Ok(()),
            Ok(()) => Err(Error::contract_violation(format!(
                "second removal of {} succeeded, expected not found",
                rrset.key()
            ))),
            Err(e) => Err(Error::contract_violation(format!(
                "second removal of {} failed with {}, expected not found",
                rrset.key(),
                e
            ))),
        }
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that removal matches on (name, type) rather than the full value
pub async fn check_remove_keyed_on_name_and_type(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    sets.add(rrset.clone()).await?;
    let outcome = async {
        let variant = ResourceRecordSet::new(rrset.name(), ["192.0.2.1"], 60, rrset.rrs_type());
        if let Err(e) = sets.remove(&variant).await {
            return Err(Error::contract_violation(format!(
                "removal of {} with different data failed: {}",
                rrset.key(),
                e
            )));
        }
        expect_absent(sets.as_ref(), &rrset.key()).await
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that a record set can be added again after removal
pub async fn check_readd_after_remove(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = example_record_set(zone);

    sets.add(rrset.clone()).await?;
    let outcome = async {
        sets.remove(&rrset).await?;
        expect_absent(sets.as_ref(), &rrset.key()).await?;

        if let Err(e) = sets.add(rrset.clone()).await {
            return Err(Error::contract_violation(format!(
                "re-adding {} after removal failed: {}",
                rrset, e
            )));
        }
        expect_listed_once(sets.as_ref(), &rrset).await
    }
    .await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that record data is stored without validation
pub async fn check_unvalidated_rrdatas_accepted(zone: &dyn Zone) -> Result<()> {
    let sets = zone.require_resource_record_sets()?;
    let rrset = invalid_record_set(zone);

    if let Err(e) = sets.add(rrset.clone()).await {
        return Err(Error::contract_violation(format!(
            "add of unvalidated record set {} failed: {}",
            rrset, e
        )));
    }
    let outcome = expect_listed_once(sets.as_ref(), &rrset).await;

    cleanup(sets.as_ref(), &rrset).await;
    outcome
}

/// Verify that a newly created zone is listed and has no record sets
///
/// Creates a zone in the backend; there is no removal operation to undo it.
pub async fn check_fresh_zone_empty(zones: &dyn Zones, spec: ZoneSpec) -> Result<()> {
    let id = spec.id.clone();
    let zone = zones.create(spec).await?;

    let listed = zones.list().await?;
    if !listed.iter().any(|z| z.id() == id) {
        return Err(Error::contract_violation(format!(
            "created zone {} is not listed",
            id
        )));
    }

    let sets = zone.require_resource_record_sets()?;
    let list = sets.list().await?;
    if !list.is_empty() {
        return Err(Error::contract_violation(format!(
            "fresh zone {} lists {} record set(s), expected none",
            id,
            list.len()
        )));
    }
    Ok(())
}

/// Verify that creating a zone with a taken identifier fails with `AlreadyExists`
///
/// Creates a zone in the backend; there is no removal operation to undo it.
pub async fn check_zone_create_duplicate(zones: &dyn Zones, spec: ZoneSpec) -> Result<()> {
    zones.create(spec.clone()).await?;

    match zones.create(spec.clone()).await {
        Err(Error::AlreadyExists(_)) => {}
        Ok(_) => {
            return Err(Error::contract_violation(format!(
                "second creation of zone {} succeeded",
                spec.id
            )));
        }
        Err(e) => {
            return Err(Error::contract_violation(format!(
                "second creation of zone {} failed with {}, expected already exists",
                spec.id, e
            )));
        }
    }

    let count = zones
        .list()
        .await?
        .iter()
        .filter(|z| z.id() == spec.id)
        .count();
    if count != 1 {
        return Err(Error::contract_violation(format!(
            "zone {} listed {} times after duplicate creation",
            spec.id, count
        )));
    }
    Ok(())
}

/// Run every record set check against the provider's first zone
///
/// Stops at the first failing check and returns its error.
pub async fn run(provider: &dyn DnsProvider) -> Result<ContractReport> {
    let zone = first_zone(provider).await?;
    let zone = zone.as_ref();

    let mut report = ContractReport {
        provider: provider.provider_name(),
        zone: zone.name().to_string(),
        passed: Vec::new(),
    };

    info!(
        provider = report.provider,
        zone = %report.zone,
        "Running provider conformance checks"
    );

    report.passed.push("zones_list");

    check_list_record_sets(zone).await?;
    report.passed.push("list_record_sets");

    check_add_visible(zone).await?;
    report.passed.push("add_visible");

    check_add_duplicate_rejected(zone).await?;
    report.passed.push("add_duplicate_rejected");

    check_remove_gone(zone).await?;
    report.passed.push("remove_gone");

    check_remove_twice_not_found(zone).await?;
    report.passed.push("remove_twice_not_found");

    check_remove_keyed_on_name_and_type(zone).await?;
    report.passed.push("remove_keyed_on_name_and_type");

    check_readd_after_remove(zone).await?;
    report.passed.push("readd_after_remove");

    check_unvalidated_rrdatas_accepted(zone).await?;
    report.passed.push("unvalidated_rrdatas_accepted");

    info!(
        provider = report.provider,
        "All {} conformance checks passed",
        report.passed.len()
    );
    Ok(report)
}

fn expect_duplicate(
    result: Result<ResourceRecordSet>,
    existing: &ResourceRecordSet,
) -> Result<()> {
    match result {
        Err(Error::DuplicateRecord(_)) => Ok(()),
        Ok(added) => Err(Error::contract_violation(format!(
            "duplicate add of {} succeeded while {} exists",
            added,
            existing.key()
        ))),
        Err(e) => Err(Error::contract_violation(format!(
            "duplicate add of {} failed with {}, expected duplicate record",
            existing.key(),
            e
        ))),
    }
}

async fn expect_listed_once(sets: &dyn ResourceRecordSets, rrset: &ResourceRecordSet) -> Result<()> {
    let key = rrset.key();
    let list = sets.list().await?;
    let matches: Vec<_> = list.iter().filter(|r| r.key() == key).collect();

    match matches.as_slice() {
        [listed] if *listed == rrset => Ok(()),
        [listed] => Err(Error::contract_violation(format!(
            "listed record set {} differs from added {}",
            listed, rrset
        ))),
        _ => Err(Error::contract_violation(format!(
            "record set {} listed {} times, expected once",
            key,
            matches.len()
        ))),
    }
}

async fn expect_absent(sets: &dyn ResourceRecordSets, key: &RecordSetKey) -> Result<()> {
    let list = sets.list().await?;
    if list.iter().any(|r| &r.key() == key) {
        return Err(Error::contract_violation(format!(
            "deleted record set {} is still present",
            key
        )));
    }
    Ok(())
}

async fn cleanup(sets: &dyn ResourceRecordSets, rrset: &ResourceRecordSet) {
    match sets.remove(rrset).await {
        Ok(()) | Err(Error::NotFound(_)) => {}
        Err(e) => warn!("Failed to clean up record set {}: {}", rrset.key(), e),
    }
}
