//! HTML projection of [`LoginFormState`].

use super::form::LoginFormState;
use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    email: &'a str,
    loading: bool,
    credential_error: bool,
    email_required_error: bool,
    password_required_error: bool,
    email_has_error: bool,
    password_has_error: bool,
}

impl<'a> From<&'a LoginFormState> for LoginTemplate<'a> {
    fn from(form: &'a LoginFormState) -> Self {
        Self {
            email: form.email_input_value(),
            loading: form.loading(),
            credential_error: form.credential_error(),
            email_required_error: form.email_required_error(),
            password_required_error: form.password_required_error(),
            email_has_error: form.credential_error() || form.email_required_error(),
            password_has_error: form.credential_error() || form.password_required_error(),
        }
    }
}

/// Render the login page for `form`. The password is never written back.
///
/// # Errors
/// Returns an error if the template fails to render.
pub fn render_login(form: &LoginFormState) -> askama::Result<String> {
    LoginTemplate::from(form).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::LoginOutcome;

    const CREDENTIAL_MESSAGE: &str = "Email address and/or password is incorrect.";

    #[test]
    fn idle_form_has_no_errors() -> anyhow::Result<()> {
        let html = render_login(&LoginFormState::new())?;
        assert!(html.contains("<title>Login | Admin</title>"));
        assert!(html.contains("Admin Login"));
        assert!(html.contains(">Login</button>"));
        assert!(!html.contains(CREDENTIAL_MESSAGE));
        assert!(!html.contains("field is required"));
        assert!(!html.contains("class=\"error\""));
        Ok(())
    }

    #[test]
    fn required_messages_follow_flags() -> anyhow::Result<()> {
        let mut form = LoginFormState::new();
        form.update_password_input_value("hunter2");
        let _ = form.submit();

        let html = render_login(&form)?;
        assert!(html.contains("Email field is required."));
        assert!(!html.contains("Password field is required."));
        Ok(())
    }

    #[test]
    fn credential_error_marks_both_inputs() -> anyhow::Result<()> {
        let mut form = LoginFormState::new();
        form.update_email_input_value("admin@example.com");
        form.update_password_input_value("wrong");
        let _ = form.submit();
        let _ = form.resolve(LoginOutcome::InvalidCredentials);

        let html = render_login(&form)?;
        assert!(html.contains(CREDENTIAL_MESSAGE));
        assert_eq!(html.matches("class=\"error\"").count(), 2);
        assert!(html.contains(">Login</button>"));
        assert!(!html.contains(">Loading</button>"));
        Ok(())
    }

    #[test]
    fn submitting_disables_the_button() -> anyhow::Result<()> {
        let mut form = LoginFormState::new();
        form.update_email_input_value("admin@example.com");
        form.update_password_input_value("hunter2");
        let _ = form.submit();

        let html = render_login(&form)?;
        assert!(html.contains("loading\" disabled>Loading</button>"));
        Ok(())
    }

    #[test]
    fn form_turns_busy_in_the_browser_on_submit() -> anyhow::Result<()> {
        let html = render_login(&LoginFormState::new())?;

        let onsubmit = html
            .split("onsubmit=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap_or_default();
        // A second submit of the same page is swallowed before it reaches the server.
        assert!(onsubmit.starts_with("if (this.dataset.submitting) { return false; }"));
        assert!(onsubmit.contains("btn.disabled = true"));
        assert!(onsubmit.contains("btn.textContent = 'Loading'"));
        Ok(())
    }

    #[test]
    fn inputs_keep_their_placeholders() -> anyhow::Result<()> {
        let html = render_login(&LoginFormState::new())?;
        assert!(html.contains("placeholder=\"Email Address\""));
        assert!(html.contains("placeholder=\"Password\""));
        Ok(())
    }

    #[test]
    fn email_is_escaped_and_password_is_not_echoed() -> anyhow::Result<()> {
        let mut form = LoginFormState::new();
        form.update_email_input_value("\"><script>alert(1)</script>");
        form.update_password_input_value("hunter2");

        let html = render_login(&form)?;
        assert!(!html.contains("<script>"));
        assert!(!html.contains("hunter2"));
        Ok(())
    }
}
