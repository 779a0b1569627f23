//! Cookie forwarding and teardown for the admin session cookie.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

/// Name and attributes of the admin session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: false,
        }
    }

    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn secure(&self) -> bool {
        self.secure
    }
}

/// Value of the inbound `Cookie` header, or an empty string.
///
/// Multiple `Cookie` headers (HTTP/2 may split them) are joined with `"; "`.
/// Values that are not visible ASCII are skipped.
#[must_use]
pub fn forward_cookie(headers: &HeaderMap) -> String {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// `Set-Cookie` value that makes the browser drop the admin session cookie.
///
/// # Errors
/// Returns an error if the configured cookie name is not a valid header value.
pub fn remove_admin_user_cookie(cookie: &SessionCookie) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = format!(
        "{}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Lax",
        cookie.name
    );
    if cookie.secure {
        value.push_str("; Secure");
    }
    HeaderValue::from_str(&value)
}
