//! Demo-request (lead capture) form state.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use crate::net::error::ApiError;
use crate::net::types::{LeadOutcome, LeadPayload, build_lead_payload};

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "Apply to Meet the Team →";
/// Submit button label while the request is in flight.
pub const PENDING_LABEL: &str = "Sending…";

pub const LEAD_SUCCESS: &str =
    "Thank you! Our team will be in touch within one business day to schedule your demo.";

/// Status banner under the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl FormStatus {
    /// CSS class for the banner, `None` while hidden.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::Success(_) => Some("form-success"),
            Self::Error(_) => Some("form-error"),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Hidden => "",
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LeadFormState {
    pub status: FormStatus,
    submitting: bool,
    /// Bumped when the form fields should be cleared.
    reset_seq: u64,
    /// Bumped when the banner should scroll into view.
    reveal_seq: u64,
}

impl LeadFormState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { PENDING_LABEL } else { SUBMIT_LABEL }
    }

    pub fn reset_seq(&self) -> u64 {
        self.reset_seq
    }

    pub fn reveal_seq(&self) -> u64 {
        self.reveal_seq
    }

    /// Start a submission from the form's `(name, value)` entries.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit<K, V>(&mut self, entries: &[(K, V)]) -> Option<LeadPayload>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(build_lead_payload(entries))
    }

    /// Apply the outcome and restore the submit control.
    pub fn finish_submit(&mut self, outcome: Result<LeadOutcome, ApiError>) {
        match outcome {
            Ok(LeadOutcome::Accepted { .. }) => {
                self.status = FormStatus::Success(LEAD_SUCCESS.to_owned());
                self.reset_seq += 1;
                self.reveal_seq += 1;
            }
            Ok(LeadOutcome::Rejected(message)) => self.status = FormStatus::Error(lead_error_message(&message)),
            Err(err) => self.status = FormStatus::Error(lead_error_message(&err.to_string())),
        }
        self.submitting = false;
    }
}

pub fn lead_error_message(detail: &str) -> String {
    format!("Something went wrong: {detail}. Please try again or email info@prezent.energy.")
}
