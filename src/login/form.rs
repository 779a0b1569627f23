//! Login form state machine.
//!
//! All transitions are plain methods on [`LoginFormState`]; none of them perform
//! I/O. The current [`Phase`] is derived from the flags, so rendering is a pure
//! projection of the state.

use crate::session::{Credentials, LoginOutcome};
use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

/// Where a successful login sends the browser.
pub const LOGIN_SUCCESS_LOCATION: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ValidationError,
    Submitting,
    CredentialError,
    Success,
}

/// What a submit action decided.
#[derive(Debug)]
#[must_use]
pub enum SubmitDecision {
    /// Both fields are filled in; send these credentials to the backend.
    Dispatch(Credentials),
    /// At least one field is empty; required flags were set.
    Rejected,
    /// A submission is already in flight or the form already succeeded.
    Ignored,
}

/// Hard navigation requested by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: &'static str,
    pub set_cookies: Vec<HeaderValue>,
}

#[derive(Debug, Clone)]
pub struct LoginFormState {
    loading: bool,
    credential_error: bool,
    email_required_error: bool,
    password_required_error: bool,
    email_input_value: String,
    password_input_value: SecretString,
    succeeded: bool,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            loading: false,
            credential_error: false,
            email_required_error: false,
            password_required_error: false,
            email_input_value: String::new(),
            password_input_value: SecretString::from(String::new()),
            succeeded: false,
        }
    }
}

impl LoginFormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.succeeded {
            Phase::Success
        } else if self.loading {
            Phase::Submitting
        } else if self.credential_error {
            Phase::CredentialError
        } else if self.email_required_error || self.password_required_error {
            Phase::ValidationError
        } else {
            Phase::Idle
        }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn credential_error(&self) -> bool {
        self.credential_error
    }

    #[must_use]
    pub fn email_required_error(&self) -> bool {
        self.email_required_error
    }

    #[must_use]
    pub fn password_required_error(&self) -> bool {
        self.password_required_error
    }

    #[must_use]
    pub fn email_input_value(&self) -> &str {
        &self.email_input_value
    }

    #[must_use]
    pub fn password_input_value(&self) -> &SecretString {
        &self.password_input_value
    }

    /// Keystroke in the email field. Clears only the email required flag.
    pub fn update_email_input_value(&mut self, value: impl Into<String>) {
        self.email_input_value = value.into();
        self.email_required_error = false;
    }

    /// Keystroke in the password field. Clears only the password required flag.
    pub fn update_password_input_value(&mut self, value: impl Into<String>) {
        self.password_input_value = SecretString::from(value.into());
        self.password_required_error = false;
    }

    /// Submit action.
    ///
    /// Empty fields are flagged and never reach the backend. A submit while a
    /// request is outstanding is dropped, so at most one login call is in flight.
    pub fn submit(&mut self) -> SubmitDecision {
        if self.loading || self.succeeded {
            return SubmitDecision::Ignored;
        }

        let email_missing = self.email_input_value.is_empty();
        let password_missing = self.password_input_value.expose_secret().is_empty();

        if email_missing || password_missing {
            if email_missing {
                self.email_required_error = true;
            }
            if password_missing {
                self.password_required_error = true;
            }
            return SubmitDecision::Rejected;
        }

        self.loading = true;
        self.credential_error = false;

        SubmitDecision::Dispatch(Credentials::new(
            self.email_input_value.clone(),
            self.password_input_value.clone(),
        ))
    }

    /// Apply the login outcome of the outstanding submission.
    ///
    /// Outcomes arriving while nothing is in flight are dropped.
    pub fn resolve(&mut self, outcome: LoginOutcome) -> Option<Navigation> {
        if !self.loading {
            return None;
        }
        self.loading = false;

        match outcome {
            LoginOutcome::Success { set_cookies } => {
                self.succeeded = true;
                Some(Navigation {
                    location: LOGIN_SUCCESS_LOCATION,
                    set_cookies,
                })
            }
            LoginOutcome::InvalidCredentials | LoginOutcome::TransportError(_) => {
                self.credential_error = true;
                self.email_required_error = false;
                self.password_required_error = false;
                None
            }
        }
    }
}
