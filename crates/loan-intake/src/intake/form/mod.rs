//! The form client: local form state, the submission round trip, and the
//! notification seam a rendering layer plugs into.

pub mod client;
pub mod session;
pub mod state;

pub use client::{ClientError, IntakeClient};
pub use session::{FormNotice, FormNotifier, FormSession};
pub use state::{ApplicantDraft, ApplicantField, FamilyMemberDraft, FormState, MemberField};
