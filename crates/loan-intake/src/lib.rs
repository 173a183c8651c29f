//! Loan application intake.
//!
//! The [`intake`] module carries the whole domain: the form client a
//! rendering layer drives, the bank catalog it offers for selection, the
//! server-side validation pass, and the document-store pipeline behind the
//! two HTTP endpoints. [`config`], [`telemetry`], and [`error`] hold the
//! process-level plumbing the service binary wires together.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
