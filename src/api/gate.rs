//! Page gate: session check that runs before a page renders.
//!
//! A page handler builds a [`PageContext`], runs [`prepare`] and then calls
//! [`PageContext::finish`] with its render closure. When the gate has written a
//! redirect the closure is never called, so no page body is produced.

use crate::session::{AuthenticationResult, SessionApi};
use axum::{
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

pub const LOGIN_LOCATION: &str = "/login";
pub const HOME_LOCATION: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRule {
    /// Login page: an authenticated session is sent to `/`.
    GuestOnly,
    /// Admin pages: a missing or invalid session is sent to `/login`.
    SessionRequired,
}

impl GateRule {
    #[must_use]
    pub const fn redirect_for(self, auth: AuthenticationResult) -> Option<&'static str> {
        match (self, auth.success) {
            (Self::GuestOnly, true) => Some(HOME_LOCATION),
            (Self::SessionRequired, false) => Some(LOGIN_LOCATION),
            _ => None,
        }
    }
}

/// Write-once response handle: either a redirect is written or rendering proceeds.
#[derive(Debug, Default)]
pub struct ResponseControl {
    redirect: Option<String>,
}

impl ResponseControl {
    /// Write a `302` redirect. Only the first write wins; returns `false` when a
    /// response was already written.
    pub fn redirect(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if let Some(existing) = &self.redirect {
            warn!("Ignoring redirect to {location}, already redirecting to {existing}");
            return false;
        }
        self.redirect = Some(location);
        true
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.redirect.is_some()
    }
}

/// Request headers (read-only) plus the response handle for one page render.
#[derive(Debug)]
pub struct PageContext {
    headers: HeaderMap,
    response: ResponseControl,
}

impl PageContext {
    #[must_use]
    pub fn new(headers: HeaderMap) -> Self {
        Self {
            headers,
            response: ResponseControl::default(),
        }
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn response(&mut self) -> &mut ResponseControl {
        &mut self.response
    }

    /// Produce the final response. `render` only runs if nothing was written.
    pub fn finish<F>(self, render: F) -> Response
    where
        F: FnOnce() -> Response,
    {
        match self.response.redirect {
            Some(location) => (StatusCode::FOUND, [(LOCATION, location)]).into_response(),
            None => render(),
        }
    }
}

/// Check the session for `ctx` and write the redirect `rule` asks for.
pub async fn prepare<A: SessionApi>(
    api: &A,
    rule: GateRule,
    ctx: &mut PageContext,
) -> AuthenticationResult {
    let auth = api.check_session(ctx.headers()).await;

    if let Some(location) = rule.redirect_for(auth) {
        debug!(?rule, success = auth.success, "Gate redirecting to {location}");
        ctx.response().redirect(location);
    }

    auth
}
