use super::common::*;
use crate::intake::domain::ApplicationStatus;
use crate::intake::service::{IntakeError, IntakeService};
use crate::intake::store::{ApplicationStore, StoreError};
use crate::intake::validation::SubmissionError;
use chrono::Utc;
use std::sync::Arc;

#[test]
fn submit_assigns_sequential_identifiers() {
    let (service, _store) = build_service();

    let first = service.submit(payload()).expect("first submission");
    let second = service.submit(payload()).expect("second submission");

    assert_eq!(first.application_id.0, "app-000001");
    assert_eq!(second.application_id.0, "app-000002");
}

#[test]
fn submit_stamps_pending_status_and_creation_time() {
    let (service, store) = build_service();

    let record = service.submit(payload()).expect("submission succeeds");
    assert_eq!(record.status, ApplicationStatus::Pending);
    assert_eq!(record.status.label(), "pending");
    assert!(record.created_at <= Utc::now());

    let stored = store
        .fetch(&record.application_id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn identical_submissions_produce_distinct_documents() {
    let (service, store) = build_service();

    let first = service.submit(payload()).expect("first submission");
    let second = service.submit(payload()).expect("second submission");

    assert_ne!(first.application_id, second.application_id);
    assert_eq!(store.records.lock().expect("store mutex").len(), 2);
}

#[test]
fn invalid_payload_never_reaches_the_store() {
    let (service, store) = build_service();

    let mut bad = payload();
    bad.selected_banks.clear();

    match service.submit(bad) {
        Err(IntakeError::Validation(SubmissionError::MissingBankSelection)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.records.lock().expect("store mutex").is_empty());
}

#[test]
fn fetch_rejects_malformed_identifiers() {
    let (service, _store) = build_service();

    match service.fetch("not-an-id") {
        Err(IntakeError::InvalidId(err)) => {
            assert_eq!(err.to_string(), "invalid application identifier");
        }
        other => panic!("expected invalid id error, got {other:?}"),
    }
}

#[test]
fn fetch_propagates_not_found_for_absent_records() {
    let (service, _store) = build_service();

    match service.fetch("app-999999") {
        Err(IntakeError::Store(StoreError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn store_failures_surface_as_store_errors() {
    let service = IntakeService::new(Arc::new(UnavailableStore));

    match service.submit(payload()) {
        Err(IntakeError::Store(StoreError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}
