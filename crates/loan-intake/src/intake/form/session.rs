use std::sync::Arc;

use super::client::{ClientError, IntakeClient};
use super::state::FormState;
use crate::intake::domain::SubmissionReceipt;

/// Outcome surfaced to the person filling in the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    Submitted(SubmissionReceipt),
    Failed { message: String },
}

/// Seam for surfacing submission outcomes without blocking the form.
pub trait FormNotifier: Send + Sync {
    fn publish(&self, notice: FormNotice);
}

/// One form instance wired to a server: state, client, and notifier.
pub struct FormSession<N> {
    state: FormState,
    client: IntakeClient,
    notifier: Arc<N>,
}

impl<N> FormSession<N>
where
    N: FormNotifier,
{
    pub fn new(client: IntakeClient, notifier: Arc<N>) -> Self {
        Self {
            state: FormState::new(),
            client,
            notifier,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Assemble the payload and run the submission round trip.
    ///
    /// Success publishes a notice and resets the form; any failure
    /// publishes the derived message and leaves every entered value in
    /// place so the user can retry without retyping. The loading flag is
    /// cleared unconditionally.
    pub async fn submit(&mut self) -> Result<SubmissionReceipt, ClientError> {
        self.state.set_loading(true);
        let payload = self.state.payload();

        let result = self.client.submit_application(&payload).await;
        match &result {
            Ok(receipt) => {
                self.notifier.publish(FormNotice::Submitted(receipt.clone()));
                self.state.reset();
            }
            Err(error) => {
                self.notifier.publish(FormNotice::Failed {
                    message: error.to_string(),
                });
            }
        }

        self.state.set_loading(false);
        result
    }
}
