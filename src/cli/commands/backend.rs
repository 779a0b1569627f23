//! Arguments describing the REST backend and the admin session cookie.

use clap::{Arg, ArgAction, ArgMatches, Command};
use url::Url;

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_SESSION_COOKIE_NAME: &str = "session-cookie-name";
pub const ARG_SESSION_COOKIE_SECURE: &str = "session-cookie-secure";
pub const ARG_BACKEND_TIMEOUT_SECONDS: &str = "backend-timeout-seconds";

#[derive(Debug)]
pub struct Options {
    pub api_base_url: Url,
    pub session_cookie_name: String,
    pub session_cookie_secure: bool,
    pub timeout_seconds: u64,
}

impl Options {
    /// Parse backend arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the base URL is missing, malformed, or not HTTP(S).
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let raw = matches
            .get_one::<String>(ARG_API_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_API_BASE_URL}"))?;

        let api_base_url = Url::parse(raw.trim())
            .map_err(|e| anyhow::anyhow!("invalid --{ARG_API_BASE_URL} '{raw}': {e}"))?;

        if !matches!(api_base_url.scheme(), "http" | "https") {
            anyhow::bail!("--{ARG_API_BASE_URL} must use http or https, got '{raw}'");
        }

        let session_cookie_name = matches
            .get_one::<String>(ARG_SESSION_COOKIE_NAME)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("missing required argument: --{ARG_SESSION_COOKIE_NAME}")
            })?;

        Ok(Self {
            api_base_url,
            session_cookie_name,
            session_cookie_secure: matches.get_flag(ARG_SESSION_COOKIE_SECURE),
            timeout_seconds: matches
                .get_one::<u64>(ARG_BACKEND_TIMEOUT_SECONDS)
                .copied()
                .unwrap_or(10),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long(ARG_API_BASE_URL)
                .help("Base URL of the admin REST API, example: https://api.example.com")
                .env("ADMINPANEL_API_BASE_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE_NAME)
                .long(ARG_SESSION_COOKIE_NAME)
                .help("Name of the admin session cookie set by the REST API")
                .env("ADMINPANEL_SESSION_COOKIE_NAME")
                .default_value("adminUser"),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE_SECURE)
                .long(ARG_SESSION_COOKIE_SECURE)
                .help("Mark the session teardown cookie as Secure")
                .env("ADMINPANEL_SESSION_COOKIE_SECURE")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_BACKEND_TIMEOUT_SECONDS)
                .long(ARG_BACKEND_TIMEOUT_SECONDS)
                .help("Timeout for REST API calls in seconds, 0 disables it")
                .env("ADMINPANEL_BACKEND_TIMEOUT_SECONDS")
                .default_value("10")
                .value_parser(clap::value_parser!(u64)),
        )
}
