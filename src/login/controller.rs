use super::form::{LoginFormState, Navigation, SubmitDecision};
use crate::session::SessionApi;
use tracing::{debug, info};

/// Drives [`LoginFormState`] against the login endpoint.
pub struct LoginFormController<'a, A> {
    api: &'a A,
    cookie: String,
}

impl<'a, A: SessionApi> LoginFormController<'a, A> {
    /// `cookie` is the browser's `Cookie` header, forwarded with the login call.
    #[must_use]
    pub fn new(api: &'a A, cookie: impl Into<String>) -> Self {
        Self {
            api,
            cookie: cookie.into(),
        }
    }

    /// Run one submit action to completion.
    ///
    /// Returns the navigation to perform when the login succeeded; otherwise the
    /// outcome is reflected in `form`.
    pub async fn submit(&self, form: &mut LoginFormState) -> Option<Navigation> {
        match form.submit() {
            SubmitDecision::Dispatch(credentials) => {
                let outcome = self.api.login(&credentials, &self.cookie).await;
                if let Some(reason) = outcome.reason() {
                    info!("Login failed: {reason}");
                }
                form.resolve(outcome)
            }
            SubmitDecision::Rejected => {
                debug!(
                    email_required = form.email_required_error(),
                    password_required = form.password_required_error(),
                    "Login form rejected before submission"
                );
                None
            }
            SubmitDecision::Ignored => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::form::Phase;
    use crate::session::{test_support::FakeSession, LoginOutcome};
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn empty_email_makes_no_network_call() {
        let api = FakeSession::unauthenticated();
        let controller = LoginFormController::new(&api, "");
        let mut form = LoginFormState::new();
        form.update_password_input_value("hunter2");

        assert_eq!(controller.submit(&mut form).await, None);
        assert!(form.email_required_error());
        assert_eq!(api.login_calls(), 0);
    }

    #[tokio::test]
    async fn failure_ends_in_credential_error() {
        let api = FakeSession::unauthenticated().with_login(LoginOutcome::InvalidCredentials);
        let controller = LoginFormController::new(&api, "adminUser=stale");
        let mut form = LoginFormState::new();
        form.update_email_input_value("admin@example.com");
        form.update_password_input_value("wrong");

        assert_eq!(controller.submit(&mut form).await, None);
        assert_eq!(form.phase(), Phase::CredentialError);
        assert!(!form.loading());
        assert_eq!(api.login_calls(), 1);
        assert_eq!(api.last_login_email().as_deref(), Some("admin@example.com"));
        assert_eq!(api.last_cookie().as_deref(), Some("adminUser=stale"));
    }

    #[tokio::test]
    async fn success_yields_navigation() {
        let cookie = HeaderValue::from_static("adminUser=fresh; Path=/");
        let api = FakeSession::unauthenticated().with_login(LoginOutcome::Success {
            set_cookies: vec![cookie.clone()],
        });
        let controller = LoginFormController::new(&api, "");
        let mut form = LoginFormState::new();
        form.update_email_input_value("admin@example.com");
        form.update_password_input_value("hunter2");

        let navigation = controller.submit(&mut form).await;
        assert_eq!(
            navigation,
            Some(Navigation {
                location: "/",
                set_cookies: vec![cookie],
            })
        );
        assert_eq!(form.phase(), Phase::Success);
        assert!(!form.loading());
    }
}
