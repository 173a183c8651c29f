use super::domain::{
    ApplicantDetails, ApplicationSubmission, FamilyMember, FamilyMemberPayload, SubmissionPayload,
};

/// Validation errors raised before any persistence attempt.
///
/// The display strings double as the HTTP error bodies, so they stay
/// user-facing rather than diagnostic.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Please add at least one family member")]
    MissingFamilyMembers,
    #[error("Please select at least one bank")]
    MissingBankSelection,
    #[error("Family member {position} is missing a valid {field}")]
    InvalidFamilyMember {
        position: usize,
        field: &'static str,
    },
}

/// Convert an inbound payload into a validated submission.
///
/// One explicit pass covers the whole nested shape: required applicant
/// fields, non-empty collections, and each family member's fields. A blank
/// string counts as absent.
pub fn submission_from_payload(
    payload: SubmissionPayload,
) -> Result<ApplicationSubmission, SubmissionError> {
    let name = required_text(payload.name)?;
    let phone = required_text(payload.phone)?;
    let email = required_text(payload.email)?;
    let address = required_text(payload.address)?;

    if payload.family_members.is_empty() {
        return Err(SubmissionError::MissingFamilyMembers);
    }

    if payload.selected_banks.is_empty() {
        return Err(SubmissionError::MissingBankSelection);
    }

    let family_members = payload
        .family_members
        .into_iter()
        .enumerate()
        .map(|(index, member)| family_member_from_payload(index, member))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ApplicationSubmission {
        applicant: ApplicantDetails {
            name,
            phone,
            email,
            address,
            occupation: optional_text(payload.occupation),
            annual_income: payload.annual_income,
        },
        family_members,
        selected_banks: payload.selected_banks,
    })
}

fn family_member_from_payload(
    index: usize,
    member: FamilyMemberPayload,
) -> Result<FamilyMember, SubmissionError> {
    let position = index + 1;
    let invalid = |field| SubmissionError::InvalidFamilyMember { position, field };

    let name = present(member.name).ok_or_else(|| invalid("name"))?;
    let relationship = present(member.relationship).ok_or_else(|| invalid("relationship"))?;
    let income = member.income.ok_or_else(|| invalid("income"))?;

    Ok(FamilyMember {
        name,
        relationship,
        income,
    })
}

fn required_text(value: Option<String>) -> Result<String, SubmissionError> {
    present(value).ok_or(SubmissionError::MissingRequiredFields)
}

fn optional_text(value: Option<String>) -> Option<String> {
    present(value)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
