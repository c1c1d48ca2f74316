//! Contract Test: Conformance Harness
//!
//! Constraints verified:
//! - A backend that follows the record set contract passes every check
//! - Each class of contract breach is detected and reported as
//!   `ContractViolation`
//! - Checks clean up the record sets they add, even when a step fails
//!
//! If this test fails, the harness can no longer tell conforming backends
//! from broken ones.

mod common;

use common::*;
use dnsprovider_core::conformance;
use dnsprovider_core::{Error, ResourceRecordSets, Result, Zone};
use std::sync::Arc;

fn provider_with(leniency: Leniency) -> (FixedProvider, Arc<LenientRecordSets>) {
    let sets = Arc::new(LenientRecordSets::new(leniency));
    let provider = FixedProvider::with_zone("example.com", Some(sets.clone()));
    (provider, sets)
}

#[tokio::test]
async fn strict_backend_passes_all_checks() {
    let (provider, sets) = provider_with(Leniency::Strict);

    let report = conformance::run(&provider).await.expect("strict backend conforms");

    assert_eq!(report.provider, "fixed");
    assert_eq!(report.zone, "example.com");
    assert_eq!(report.passed.len(), 9);
    assert!(report.passed.contains(&"add_duplicate_rejected"));
    assert!(report.passed.contains(&"unvalidated_rrdatas_accepted"));

    // Every check removed what it added.
    assert_eq!(sets.len(), 0);
    assert!(sets.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn overwriting_duplicates_is_detected() {
    let (provider, sets) = provider_with(Leniency::OverwriteDuplicates);
    let zone = conformance::first_zone(&provider).await.unwrap();

    let err = conformance::check_add_duplicate_rejected(zone.as_ref())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
    assert_eq!(sets.len(), 0, "failed check must still clean up");

    let err = conformance::run(&provider).await.unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

#[tokio::test]
async fn silent_double_removal_is_detected() {
    let (provider, _sets) = provider_with(Leniency::IgnoreMissingOnRemove);
    let zone = conformance::first_zone(&provider).await.unwrap();

    let err = conformance::check_remove_twice_not_found(zone.as_ref())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
}

#[tokio::test]
async fn removal_by_full_value_is_detected() {
    let (provider, sets) = provider_with(Leniency::RemoveByValue);
    let zone = conformance::first_zone(&provider).await.unwrap();

    // Plain add/remove of the same value still works...
    conformance::check_remove_gone(zone.as_ref()).await.unwrap();

    // ...but removal keyed on (name, type) does not.
    let err = conformance::check_remove_keyed_on_name_and_type(zone.as_ref())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
    assert_eq!(sets.len(), 0, "failed check must still clean up");
}

#[tokio::test]
async fn record_data_validation_is_detected() {
    let (provider, sets) = provider_with(Leniency::ValidateAddresses);
    let zone = conformance::first_zone(&provider).await.unwrap();

    // The well-formed sample passes.
    conformance::check_add_visible(zone.as_ref()).await.unwrap();

    let err = conformance::check_unvalidated_rrdatas_accepted(zone.as_ref())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ContractViolation(_)));
    assert_eq!(sets.len(), 0);
}

#[tokio::test]
async fn sample_record_sets_follow_zone_name() {
    let (provider, _sets) = provider_with(Leniency::Strict);
    let zone = conformance::first_zone(&provider).await.unwrap();

    let example = conformance::example_record_set(zone.as_ref());
    assert_eq!(example.name(), "www11.example.com");
    assert_eq!(example.rrdatas(), ["10.10.10.10", "169.20.20.20"]);
    assert_eq!(example.ttl(), conformance::EXAMPLE_TTL);

    let invalid = conformance::invalid_record_set(zone.as_ref());
    assert_eq!(invalid.name(), "www12.example.com");
    assert_eq!(invalid.rrdatas(), ["rubbish", "rubbish"]);
}

async fn flaky_zone() -> (Arc<dyn Zone>, Arc<LenientRecordSets>) {
    let (provider, sets) = provider_with(Leniency::FailFirstRemove);
    let zone = conformance::first_zone(&provider).await.unwrap();
    (zone, sets)
}

async fn assert_cleaned_up(
    check: &str,
    result: Result<()>,
    zone: &dyn Zone,
    sets: &LenientRecordSets,
) {
    assert!(
        matches!(result, Err(Error::BackendUnavailable(_)) | Err(Error::ContractViolation(_))),
        "{} should report the failed removal, got {:?}",
        check,
        result
    );
    assert_eq!(sets.len(), 0, "{} left its record set behind", check);

    // The zone is clean again, so the next check is judged on its own merits.
    conformance::check_add_visible(zone)
        .await
        .unwrap_or_else(|e| panic!("check after {} failed: {}", check, e));
}

#[tokio::test]
async fn failed_removal_step_still_cleans_up() {
    let (zone, sets) = flaky_zone().await;
    let result = conformance::check_remove_gone(zone.as_ref()).await;
    assert_cleaned_up("remove_gone", result, zone.as_ref(), &sets).await;

    let (zone, sets) = flaky_zone().await;
    let result = conformance::check_remove_twice_not_found(zone.as_ref()).await;
    assert_cleaned_up("remove_twice_not_found", result, zone.as_ref(), &sets).await;

    let (zone, sets) = flaky_zone().await;
    let result = conformance::check_remove_keyed_on_name_and_type(zone.as_ref()).await;
    assert_cleaned_up("remove_keyed_on_name_and_type", result, zone.as_ref(), &sets).await;

    let (zone, sets) = flaky_zone().await;
    let result = conformance::check_readd_after_remove(zone.as_ref()).await;
    assert_cleaned_up("readd_after_remove", result, zone.as_ref(), &sets).await;
}

#[tokio::test]
async fn failed_removal_does_not_cascade_through_run() {
    let (provider, sets) = provider_with(Leniency::FailFirstRemove);
    let zone = conformance::first_zone(&provider).await.unwrap();

    // Trip the transient failure inside a check, then run the full suite.
    assert!(conformance::check_remove_gone(zone.as_ref()).await.is_err());

    let report = conformance::run(&provider).await.expect("zone was left clean");
    assert_eq!(report.passed.len(), 9);
    assert_eq!(sets.len(), 0);
}
