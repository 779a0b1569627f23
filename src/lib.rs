//! # Adminpanel (login gate for the admin panel)
//!
//! `adminpanel` renders the admin panel pages server-side and delegates every
//! authentication decision to an external REST backend.
//!
//! ## Session gate
//!
//! Before a page is rendered, the browser's cookie is forwarded to
//! `GET /users/authenticate`. The answer decides whether the page renders or the
//! request is redirected:
//!
//! - **Login page:** an already authenticated session is bounced to `/`.
//! - **Admin pages:** a missing or invalid session is bounced to `/login`.
//!
//! Backend failures are indistinguishable from "not authenticated"; callers only
//! ever see `{ success: false }`.
//!
//! ## Login handshake
//!
//! The login form is an explicit state machine ([`login::form`]). Submissions with
//! an empty field never reach the backend. Valid submissions are sent to
//! `POST /users/login`; on success the backend's `Set-Cookie` headers are relayed
//! to the browser together with a redirect to `/`.

pub mod api;
pub mod cli;
pub mod login;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
