//! Error types for the form client
//!
//! Covers:
//! - Local validation failures (never reach the network)
//! - Transport failures reaching the endpoint
//! - Non-success responses, which are not told apart
//! - Misuse of the submission state machine

use crate::fields::Field;
use crate::session::FormPhase;

/// Inline message for a form with blank fields
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Inline message prefix for any failed API call
pub const API_ERROR_PREFIX: &str = "Error calling API: ";

/// Failure while fetching the key from the endpoint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Request never produced a response
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response; 404 and 500 read the same to the user
    #[error("Failed to fetch SAP key")]
    Status(u16),

    /// Success response with an unreadable body
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("client setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    /// Message shown inline under the form
    #[must_use]
    pub fn inline_message(&self) -> String {
        format!("{API_ERROR_PREFIX}{self}")
    }
}

/// Form session error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// At least one field is blank
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingFields(Vec<Field>),

    /// A submission is already pending
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Transition not permitted by the session state machine
    #[error("illegal form transition: {from:?} -> {to:?}")]
    IllegalTransition { from: FormPhase, to: FormPhase },

    /// The key request failed
    #[error("{}", .0.inline_message())]
    Client(#[from] ClientError),
}
