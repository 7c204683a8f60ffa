//! Login form state and its submission gate.
//!
//! Idle → InFlight → { Done (verified) | Idle with an error message }.
//! A submission is accepted only from `Idle` and only with both fields filled,
//! so a second click while a request is running is a no-op.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use flow::{Credentials, LoginOutcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Done,
}

#[derive(Clone, Debug, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub request: RequestState,
}

impl LoginFormState {
    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.request == RequestState::InFlight
    }

    /// Claim the form for a submission.
    ///
    /// Returns the credentials to send, or `None` when a request is already
    /// running, the login already succeeded, or a field is empty. The error
    /// message from a previous attempt stays visible until this one finishes.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.request != RequestState::Idle {
            return None;
        }
        let credentials = required_credentials(&self.email, &self.password)?;
        self.request = RequestState::InFlight;
        Some(credentials)
    }

    /// Record the outcome of the submission started by [`Self::begin_submit`].
    pub fn finish(&mut self, outcome: &LoginOutcome) {
        match outcome {
            LoginOutcome::Verified(_) => {
                self.request = RequestState::Done;
                self.error = None;
            }
            LoginOutcome::Failed(message) => {
                self.request = RequestState::Idle;
                self.error = Some(message.clone());
            }
        }
    }
}

/// Apply the form's `required` constraints.
///
/// Email inputs strip surrounding whitespace before validation; passwords are
/// taken verbatim.
#[must_use]
pub fn required_credentials(email: &str, password: &str) -> Option<Credentials> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some(Credentials::new(email, password))
}
