use crate::intake::domain::{BankId, FamilyMemberPayload, SubmissionPayload};

/// Applicant fields addressable through [`FormState::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantField {
    Name,
    Phone,
    Email,
    Address,
    Occupation,
    AnnualIncome,
}

/// Family-member fields addressable through [`FormState::update_family_member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Relationship,
    Income,
}

/// Draft of the applicant section, held as raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub occupation: String,
    pub annual_income: String,
}

/// Draft of one family-member entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMemberDraft {
    pub name: String,
    pub relationship: String,
    pub income: String,
}

/// All local, mutable state behind the intake form: the applicant field
/// drafts, the family-member list, the selected-bank sequence, and the
/// loading flag that disables the submit control while a request is in
/// flight. The flag is advisory only, not a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    applicant: ApplicantDraft,
    family_members: Vec<FamilyMemberDraft>,
    selected_banks: Vec<BankId>,
    loading: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Empty form with exactly one family-member stub, mirroring the
    /// initial render.
    pub fn new() -> Self {
        Self {
            applicant: ApplicantDraft::default(),
            family_members: vec![FamilyMemberDraft::default()],
            selected_banks: Vec::new(),
            loading: false,
        }
    }

    pub fn applicant(&self) -> &ApplicantDraft {
        &self.applicant
    }

    pub fn family_members(&self) -> &[FamilyMemberDraft] {
        &self.family_members
    }

    pub fn selected_banks(&self) -> &[BankId] {
        &self.selected_banks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace one applicant field, leaving the others untouched.
    pub fn update_field(&mut self, field: ApplicantField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ApplicantField::Name => self.applicant.name = value,
            ApplicantField::Phone => self.applicant.phone = value,
            ApplicantField::Email => self.applicant.email = value,
            ApplicantField::Address => self.applicant.address = value,
            ApplicantField::Occupation => self.applicant.occupation = value,
            ApplicantField::AnnualIncome => self.applicant.annual_income = value,
        }
    }

    /// Mutate one field of one entry in place. The index must be within
    /// bounds; out-of-range indices panic.
    pub fn update_family_member(
        &mut self,
        index: usize,
        field: MemberField,
        value: impl Into<String>,
    ) {
        let value = value.into();
        let member = &mut self.family_members[index];
        match field {
            MemberField::Name => member.name = value,
            MemberField::Relationship => member.relationship = value,
            MemberField::Income => member.income = value,
        }
    }

    /// Append an empty member record.
    pub fn add_family_member(&mut self) {
        self.family_members.push(FamilyMemberDraft::default());
    }

    /// Remove the entry at `index`. The operation permits index 0 even
    /// though a rendered form offers no control for the first entry.
    pub fn remove_family_member(&mut self, index: usize) {
        self.family_members.remove(index);
    }

    /// Add the bank to the selection if absent, remove it if present.
    pub fn toggle_bank(&mut self, id: BankId) {
        if let Some(position) = self.selected_banks.iter().position(|bank| *bank == id) {
            self.selected_banks.remove(position);
        } else {
            self.selected_banks.push(id);
        }
    }

    pub fn is_selected(&self, id: BankId) -> bool {
        self.selected_banks.contains(&id)
    }

    /// Back to the initial empty form: blank applicant fields, one member
    /// stub, no selected banks.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Assemble the drafts into the submission payload. Blank text becomes
    /// an absent field; numeric drafts that fail to parse are sent as
    /// absent numbers and rejected by the server's shape validation.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            name: draft_text(&self.applicant.name),
            phone: draft_text(&self.applicant.phone),
            email: draft_text(&self.applicant.email),
            address: draft_text(&self.applicant.address),
            occupation: draft_text(&self.applicant.occupation),
            annual_income: draft_amount(&self.applicant.annual_income),
            family_members: self
                .family_members
                .iter()
                .map(|member| FamilyMemberPayload {
                    name: draft_text(&member.name),
                    relationship: draft_text(&member.relationship),
                    income: draft_amount(&member.income),
                })
                .collect(),
            selected_banks: self.selected_banks.clone(),
        }
    }
}

fn draft_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn draft_amount(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}
