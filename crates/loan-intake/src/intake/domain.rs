use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted applications.
///
/// Identifiers are assigned by the service at persistence time and take the
/// form `app-` followed by a zero-padded decimal sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    /// Validate an externally supplied identifier before any store lookup.
    pub fn parse(raw: &str) -> Result<Self, InvalidApplicationId> {
        let digits = raw.strip_prefix("app-").unwrap_or_default();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidApplicationId {
                raw: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raised when a lookup identifier does not match the assigned format.
#[derive(Debug, thiserror::Error)]
#[error("invalid application identifier")]
pub struct InvalidApplicationId {
    pub raw: String,
}

/// Integer handle into the bank catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(pub u32);

/// Personal details section of an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<f64>,
}

/// One dependent record nested within an application. Never independently
/// addressable; ordering is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub name: String,
    pub relationship: String,
    pub income: f64,
}

/// A submission that passed the validation pass and may be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub applicant: ApplicantDetails,
    pub family_members: Vec<FamilyMember>,
    pub selected_banks: Vec<BankId>,
}

/// The wire form of a submission exactly as a form client posts it.
///
/// Every field is optional so that presence checks happen in one explicit
/// validation pass with curated error messages, rather than piecemeal at
/// deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: Option<f64>,
    pub family_members: Vec<FamilyMemberPayload>,
    pub selected_banks: Vec<BankId>,
}

/// Wire form of one family-member entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyMemberPayload {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub income: Option<f64>,
}

/// Lifecycle state of a persisted application. Submissions land as
/// `pending`; no endpoint exists to move them further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
        }
    }
}

/// The persisted aggregate: applicant fields, nested family members, bank
/// selection, and the server-assigned metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub family_members: Vec<FamilyMember>,
    pub selected_banks: Vec<BankId>,
    pub created_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// Confirmation returned to the form client after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub message: String,
    pub application_id: ApplicationId,
}
