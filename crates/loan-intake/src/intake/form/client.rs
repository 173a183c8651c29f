use reqwest::StatusCode;
use serde::Deserialize;

use crate::intake::domain::{ApplicationRecord, SubmissionPayload, SubmissionReceipt};

/// HTTP client for the intake endpoints.
pub struct IntakeClient {
    http: reqwest::Client,
    base_url: String,
}

impl IntakeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the single submission POST. Only HTTP 201 counts as success.
    pub async fn submit_application(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, ClientError> {
        let url = format!("{}/api/applications", self.base_url);
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status() == StatusCode::CREATED {
            return response
                .json::<SubmissionReceipt>()
                .await
                .map_err(ClientError::Unexpected);
        }

        Err(error_from_response(response).await)
    }

    /// Retrieve a stored application by identifier.
    pub async fn fetch_application(&self, id: &str) -> Result<ApplicationRecord, ClientError> {
        let url = format!("{}/api/applications/{id}", self.base_url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        if response.status() == StatusCode::OK {
            return response
                .json::<ApplicationRecord>()
                .await
                .map_err(ClientError::Unexpected);
        }

        Err(error_from_response(response).await)
    }
}

/// Client-side failure taxonomy. Display strings are the user-facing
/// messages a form surfaces; server-supplied error text is carried
/// verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Server Error: {status}")]
    Status { status: u16 },
    #[error("Could not connect to server. Please check your internet connection.")]
    Connection(#[source] reqwest::Error),
    #[error("Something went wrong. Please try again.")]
    Unexpected(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn classify_transport_error(err: reqwest::Error) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::Connection(err)
    } else {
        ClientError::Unexpected(err)
    }
}

async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    match response.json::<ErrorBody>().await {
        Ok(body) => ClientError::Rejected {
            status,
            message: body.error,
        },
        Err(_) => ClientError::Status { status },
    }
}
