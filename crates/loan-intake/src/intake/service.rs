use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, InvalidApplicationId, SubmissionPayload,
};
use super::store::{ApplicationStore, StoreError};
use super::validation::{submission_from_payload, SubmissionError};

/// Service composing the validation pass and the document store.
pub struct IntakeService<S> {
    store: Arc<S>,
    sequence: AtomicU64,
}

impl<S> IntakeService<S>
where
    S: ApplicationStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_application_id(&self) -> ApplicationId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ApplicationId(format!("app-{id:06}"))
    }

    /// Validate and persist one submission, returning the stored record.
    pub fn submit(&self, payload: SubmissionPayload) -> Result<ApplicationRecord, IntakeError> {
        let submission = submission_from_payload(payload)?;

        let record = ApplicationRecord {
            application_id: self.next_application_id(),
            applicant: submission.applicant,
            family_members: submission.family_members,
            selected_banks: submission.selected_banks,
            created_at: Utc::now(),
            status: ApplicationStatus::Pending,
        };

        let stored = self.store.insert(record)?;
        Ok(stored)
    }

    /// Look up a stored application by its raw identifier string.
    pub fn fetch(&self, raw_id: &str) -> Result<ApplicationRecord, IntakeError> {
        let id = ApplicationId::parse(raw_id)?;
        let record = self.store.fetch(&id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    #[error(transparent)]
    InvalidId(#[from] InvalidApplicationId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
