//! Session credential handling against the admin REST API.

pub mod client;
pub mod cookie;
pub mod types;

pub use self::client::{BackendConfig, SessionApi, SessionClient};
pub use self::cookie::{forward_cookie, remove_admin_user_cookie, SessionCookie};
pub use self::types::{AuthenticationResult, Credentials, LoginOutcome};

#[cfg(test)]
pub(crate) mod test_support;
