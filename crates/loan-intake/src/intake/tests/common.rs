use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::intake::domain::{
    ApplicationId, ApplicationRecord, BankId, FamilyMemberPayload, SubmissionPayload,
};
use crate::intake::router::intake_router;
use crate::intake::service::IntakeService;
use crate::intake::store::{ApplicationStore, StoreError};

pub(super) fn member(name: &str, relationship: &str, income: f64) -> FamilyMemberPayload {
    FamilyMemberPayload {
        name: Some(name.to_string()),
        relationship: Some(relationship.to_string()),
        income: Some(income),
    }
}

pub(super) fn payload() -> SubmissionPayload {
    SubmissionPayload {
        name: Some("Avery Coleman".to_string()),
        phone: Some("515-555-0134".to_string()),
        email: Some("avery.coleman@example.com".to_string()),
        address: Some("412 Walnut St, Des Moines, IA".to_string()),
        occupation: Some("Pharmacist".to_string()),
        annual_income: Some(86_500.0),
        family_members: vec![
            member("Jordan Coleman", "Spouse", 52_000.0),
            member("Riley Coleman", "Child", 0.0),
        ],
        selected_banks: vec![BankId(1), BankId(3), BankId(9)],
    }
}

pub(super) fn build_service() -> (Arc<IntakeService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(IntakeService::new(store.clone()));
    (service, store)
}

pub(super) fn intake_router_with_service(
    service: Arc<IntakeService<MemoryStore>>,
) -> axum::Router {
    intake_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationStore for MemoryStore {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableStore;

impl ApplicationStore for UnavailableStore {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
