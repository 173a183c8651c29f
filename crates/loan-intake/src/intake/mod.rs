//! Loan application intake: the bank catalog, the form client, submission
//! validation, and the persistence pipeline behind the two HTTP endpoints.

pub mod catalog;
pub mod domain;
pub mod form;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{BankCatalog, BankEntry, CatalogError};
pub use domain::{
    ApplicantDetails, ApplicationId, ApplicationRecord, ApplicationStatus, ApplicationSubmission,
    BankId, FamilyMember, FamilyMemberPayload, InvalidApplicationId, SubmissionPayload,
    SubmissionReceipt,
};
pub use form::{
    ApplicantDraft, ApplicantField, ClientError, FamilyMemberDraft, FormNotice, FormNotifier,
    FormSession, FormState, IntakeClient, MemberField,
};
pub use router::intake_router;
pub use service::{IntakeError, IntakeService};
pub use store::{ApplicationStore, StoreError};
pub use validation::{submission_from_payload, SubmissionError};
