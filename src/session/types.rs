//! Wire and result types shared by the session clients.

use axum::http::HeaderValue;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `GET /users/authenticate`, also the normalized failure value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthenticationResult {
    #[serde(default)]
    pub success: bool,
}

impl AuthenticationResult {
    #[must_use]
    pub const fn authenticated() -> Self {
        Self { success: true }
    }

    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self { success: false }
    }
}

/// Email and password typed into the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// JSON payload of `POST /users/login`.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// JSON body of `POST /users/login`.
#[derive(Deserialize, Debug)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub success: bool,
}

/// Result of a login attempt.
///
/// The UI only renders [`LoginOutcome::success`]; the variants keep the reason
/// around for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Backend accepted the credentials. `set_cookies` must reach the browser.
    Success { set_cookies: Vec<HeaderValue> },
    /// Backend answered but refused the credentials.
    InvalidCredentials,
    /// The backend could not be reached or answered with garbage.
    TransportError(String),
}

impl LoginOutcome {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::InvalidCredentials => Some("invalid credentials"),
            Self::TransportError(reason) => Some(reason),
        }
    }
}
