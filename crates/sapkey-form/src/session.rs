//! Form session state machine
//!
//! ```text
//! Editing ──submit──> Submitting ──key──> Success ──dismiss──> Editing
//!    │                    │
//!    └─blank field─┐      └─failure─┐
//!                  v                v
//!                Error <────────────┘ ──edit──> Editing
//! ```
//!
//! `Submitting` is the pending half of a submission; [`FormSession::resolve`]
//! supplies the resolved value or error. Only one submission can be pending.

use crate::client::KeyClient;
use crate::error::{ClientError, FormError, REQUIRED_FIELDS_MESSAGE};
use crate::fields::{Field, FormData};
use serde::Serialize;

/// Session state tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormPhase {
    Editing,
    Submitting,
    Success,
    Error,
}

/// Phases reachable from `from`
#[must_use]
pub fn allowed_transitions(from: FormPhase) -> &'static [FormPhase] {
    use FormPhase::{Editing, Error, Submitting, Success};
    match from {
        Editing => &[Submitting, Error],
        Submitting => &[Success, Error],
        Success => &[Editing],
        Error => &[Editing, Submitting, Error],
    }
}

/// Validates a phase transition
pub fn validate_transition(from: FormPhase, to: FormPhase) -> Result<(), FormError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(FormError::IllegalTransition { from, to })
    }
}

/// Submitted values together with the key the endpoint returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub form_data: FormData,
    pub sap_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormState {
    Editing,
    Submitting { snapshot: FormData },
    Success(SubmissionResult),
    Error(String),
}

impl FormState {
    fn phase(&self) -> FormPhase {
        match self {
            FormState::Editing => FormPhase::Editing,
            FormState::Submitting { .. } => FormPhase::Submitting,
            FormState::Success(_) => FormPhase::Success,
            FormState::Error(_) => FormPhase::Error,
        }
    }
}

/// One interactive form session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    data: FormData,
    state: FormState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Empty form in `Editing`
    #[must_use]
    pub fn new() -> Self {
        Self::with_data(FormData::new())
    }

    /// Pre-filled form in `Editing`
    #[must_use]
    pub fn with_data(data: FormData) -> Self {
        Self {
            data,
            state: FormState::Editing,
        }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Inline error message, while in `Error`
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Confirmation contents, while in `Success`
    #[must_use]
    pub fn result(&self) -> Option<&SubmissionResult> {
        match &self.state {
            FormState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !matches!(self.state, FormState::Submitting { .. } | FormState::Success(_))
            && self.data.is_complete()
    }

    /// Change a field.
    ///
    /// Clears an inline error. Edits made while a submission is pending do not
    /// alter the values already sent.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        if matches!(self.state, FormState::Error(_)) {
            self.state = FormState::Editing;
        }
    }

    /// Start a submission; on success the session is pending.
    ///
    /// # Errors
    /// - `FormError::MissingFields` if any field is blank; the session moves to
    ///   `Error` and no request must be issued
    /// - `FormError::SubmissionInFlight` if a submission is already pending
    /// - `FormError::IllegalTransition` while the confirmation is open
    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        let from = self.phase();
        if from == FormPhase::Submitting {
            return Err(FormError::SubmissionInFlight);
        }

        let missing = self.data.missing_fields();
        if !missing.is_empty() {
            validate_transition(from, FormPhase::Error)?;
            tracing::debug!(?missing, "form submission rejected");
            self.state = FormState::Error(REQUIRED_FIELDS_MESSAGE.to_string());
            return Err(FormError::MissingFields(missing));
        }

        validate_transition(from, FormPhase::Submitting)?;
        self.state = FormState::Submitting {
            snapshot: self.data.clone(),
        };
        Ok(())
    }

    /// Resolve the pending submission with the fetched key or its failure
    ///
    /// # Errors
    /// - `FormError::IllegalTransition` if nothing is pending
    /// - `FormError::Client` carrying `outcome`'s error; the session is then in
    ///   `Error` with the inline message set
    pub fn resolve(
        &mut self,
        outcome: Result<String, ClientError>,
    ) -> Result<&SubmissionResult, FormError> {
        let snapshot = match &self.state {
            FormState::Submitting { snapshot } => snapshot.clone(),
            _ => {
                let to = if outcome.is_ok() {
                    FormPhase::Success
                } else {
                    FormPhase::Error
                };
                return Err(FormError::IllegalTransition {
                    from: self.phase(),
                    to,
                });
            }
        };

        match outcome {
            Ok(sap_key) => {
                tracing::info!(%sap_key, "form submitted");
                self.state = FormState::Success(SubmissionResult {
                    form_data: snapshot,
                    sap_key,
                });
                self.result().ok_or(FormError::IllegalTransition {
                    from: FormPhase::Submitting,
                    to: FormPhase::Success,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "form submission failed");
                self.state = FormState::Error(e.inline_message());
                Err(FormError::Client(e))
            }
        }
    }

    /// Validate, fetch the key, and resolve
    ///
    /// # Errors
    /// See [`FormSession::begin_submit`] and [`FormSession::resolve`].
    pub async fn submit(
        &mut self,
        client: &dyn KeyClient,
    ) -> Result<&SubmissionResult, FormError> {
        self.begin_submit()?;
        let outcome = client.fetch_key().await;
        self.resolve(outcome)
    }

    /// Close the confirmation and return to `Editing` with values retained
    ///
    /// # Errors
    /// - `FormError::IllegalTransition` unless the confirmation is open
    pub fn dismiss(&mut self) -> Result<(), FormError> {
        if self.phase() != FormPhase::Success {
            return Err(FormError::IllegalTransition {
                from: self.phase(),
                to: FormPhase::Editing,
            });
        }
        self.state = FormState::Editing;
        Ok(())
    }
}
