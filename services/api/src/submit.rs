use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Args;
use loan_intake::error::AppError;
use loan_intake::intake::{
    ApplicantField, BankCatalog, BankId, FamilyMemberPayload, FormNotice, FormNotifier,
    FormSession, FormState, IntakeClient, MemberField, SubmissionPayload,
};

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// Base URL of a running intake service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub(crate) server_url: String,
    /// JSON draft of the application to submit
    #[arg(long, required_unless_present = "sample")]
    pub(crate) file: Option<PathBuf>,
    /// Submit a built-in example application instead of reading a draft
    #[arg(long, conflicts_with = "file")]
    pub(crate) sample: bool,
    /// Bank catalog JSON used to label selections (defaults to the built-in list)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct FetchArgs {
    /// Base URL of a running intake service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub(crate) server_url: String,
    /// Identifier returned at submission time (app-000001, ...)
    pub(crate) id: String,
    /// Bank catalog JSON used to label selections (defaults to the built-in list)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

/// Prints submission outcomes to the terminal, the CLI's stand-in for a
/// toast in a rendered form.
struct TerminalNotifier;

impl FormNotifier for TerminalNotifier {
    fn publish(&self, notice: FormNotice) {
        match notice {
            FormNotice::Submitted(receipt) => {
                println!("{} ({})", receipt.message, receipt.application_id);
            }
            FormNotice::Failed { message } => println!("{message}"),
        }
    }
}

pub(crate) async fn run_submit(args: SubmitArgs) -> Result<(), AppError> {
    let SubmitArgs {
        server_url,
        file,
        sample,
        catalog,
    } = args;

    let draft = match file {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            serde_json::from_slice(&bytes)?
        }
        None => {
            debug_assert!(sample, "clap requires --file or --sample");
            sample_draft()
        }
    };

    let catalog = load_catalog(catalog)?;
    let mut session = FormSession::new(IntakeClient::new(server_url), Arc::new(TerminalNotifier));
    fill_from_draft(session.state_mut(), &draft);
    describe_form(session.state(), &catalog);

    session.submit().await?;
    Ok(())
}

pub(crate) async fn run_fetch(args: FetchArgs) -> Result<(), AppError> {
    let FetchArgs {
        server_url,
        id,
        catalog,
    } = args;

    let catalog = load_catalog(catalog)?;
    let client = IntakeClient::new(server_url);
    let record = client.fetch_application(&id).await?;

    println!("Application {}", record.application_id);
    println!("Status: {}", record.status.label());
    println!("Received: {}", record.created_at.with_timezone(&Local));
    println!(
        "Applicant: {} <{}>",
        record.applicant.name, record.applicant.email
    );
    println!("Phone: {}", record.applicant.phone);
    println!("Address: {}", record.applicant.address);
    if let Some(occupation) = &record.applicant.occupation {
        println!("Occupation: {occupation}");
    }
    if let Some(income) = record.applicant.annual_income {
        println!("Annual income: {income}");
    }

    println!("\nFamily members");
    for member in &record.family_members {
        println!(
            "- {} ({}), income {}",
            member.name, member.relationship, member.income
        );
    }

    println!("\nSelected banks");
    for id in &record.selected_banks {
        println!("- {}", bank_label(&catalog, *id));
    }

    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<BankCatalog, AppError> {
    let path = path.or_else(|| std::env::var_os("APP_BANK_CATALOG").map(PathBuf::from));
    match path {
        Some(path) => Ok(BankCatalog::from_path(path)?),
        None => Ok(BankCatalog::builtin()),
    }
}

fn bank_label(catalog: &BankCatalog, id: BankId) -> String {
    match catalog.get(id) {
        Some(entry) => entry.name.clone(),
        None => format!("bank #{}", id.0),
    }
}

/// Replay a draft through the form mutators, the same path a rendered
/// form takes one keystroke at a time.
fn fill_from_draft(state: &mut FormState, draft: &SubmissionPayload) {
    state.update_field(ApplicantField::Name, draft.name.clone().unwrap_or_default());
    state.update_field(
        ApplicantField::Phone,
        draft.phone.clone().unwrap_or_default(),
    );
    state.update_field(
        ApplicantField::Email,
        draft.email.clone().unwrap_or_default(),
    );
    state.update_field(
        ApplicantField::Address,
        draft.address.clone().unwrap_or_default(),
    );
    state.update_field(
        ApplicantField::Occupation,
        draft.occupation.clone().unwrap_or_default(),
    );
    state.update_field(
        ApplicantField::AnnualIncome,
        draft
            .annual_income
            .map(|value| value.to_string())
            .unwrap_or_default(),
    );

    for (index, member) in draft.family_members.iter().enumerate() {
        if index > 0 {
            state.add_family_member();
        }
        state.update_family_member(
            index,
            MemberField::Name,
            member.name.clone().unwrap_or_default(),
        );
        state.update_family_member(
            index,
            MemberField::Relationship,
            member.relationship.clone().unwrap_or_default(),
        );
        state.update_family_member(
            index,
            MemberField::Income,
            member.income.map(|value| value.to_string()).unwrap_or_default(),
        );
    }

    for bank in &draft.selected_banks {
        state.toggle_bank(*bank);
    }
}

fn describe_form(state: &FormState, catalog: &BankCatalog) {
    println!("Submitting application for {}", state.applicant().name);
    println!("Family members: {}", state.family_members().len());
    let labels: Vec<String> = state
        .selected_banks()
        .iter()
        .map(|id| bank_label(catalog, *id))
        .collect();
    println!("Selected banks: {}", labels.join(", "));
}

fn sample_draft() -> SubmissionPayload {
    SubmissionPayload {
        name: Some("Avery Coleman".to_string()),
        phone: Some("515-555-0134".to_string()),
        email: Some("avery.coleman@example.com".to_string()),
        address: Some("412 Walnut St, Des Moines, IA".to_string()),
        occupation: Some("Pharmacist".to_string()),
        annual_income: Some(86_500.0),
        family_members: vec![
            FamilyMemberPayload {
                name: Some("Jordan Coleman".to_string()),
                relationship: Some("Spouse".to_string()),
                income: Some(52_000.0),
            },
            FamilyMemberPayload {
                name: Some("Riley Coleman".to_string()),
                relationship: Some("Child".to_string()),
                income: Some(0.0),
            },
        ],
        selected_banks: vec![BankId(1), BankId(3), BankId(9)],
    }
}
