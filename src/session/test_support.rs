//! In-memory [`SessionApi`] used by unit tests.

use super::{AuthenticationResult, Credentials, LoginOutcome, SessionApi};
use axum::http::HeaderMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

pub(crate) struct FakeSession {
    authenticated: bool,
    outcome: LoginOutcome,
    checks: AtomicUsize,
    logins: AtomicUsize,
    last_email: Mutex<Option<String>>,
    last_cookie: Mutex<Option<String>>,
}

impl FakeSession {
    fn new(authenticated: bool) -> Self {
        Self {
            authenticated,
            outcome: LoginOutcome::InvalidCredentials,
            checks: AtomicUsize::new(0),
            logins: AtomicUsize::new(0),
            last_email: Mutex::new(None),
            last_cookie: Mutex::new(None),
        }
    }

    pub(crate) fn authenticated() -> Self {
        Self::new(true)
    }

    pub(crate) fn unauthenticated() -> Self {
        Self::new(false)
    }

    pub(crate) fn with_login(mut self, outcome: LoginOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub(crate) fn session_checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub(crate) fn last_login_email(&self) -> Option<String> {
        self.last_email.lock().ok().and_then(|guard| guard.clone())
    }

    pub(crate) fn last_cookie(&self) -> Option<String> {
        self.last_cookie.lock().ok().and_then(|guard| guard.clone())
    }
}

impl SessionApi for FakeSession {
    async fn check_session(&self, _headers: &HeaderMap) -> AuthenticationResult {
        self.checks.fetch_add(1, Ordering::SeqCst);
        AuthenticationResult {
            success: self.authenticated,
        }
    }

    async fn login(&self, credentials: &Credentials, cookie: &str) -> LoginOutcome {
        self.logins.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_email.lock() {
            *guard = Some(credentials.email.clone());
        }
        if let Ok(mut guard) = self.last_cookie.lock() {
            *guard = Some(cookie.to_string());
        }
        self.outcome.clone()
    }
}
