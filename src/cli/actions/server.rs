use crate::{
    api::{self, PanelState},
    session::{BackendConfig, SessionClient, SessionCookie},
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub api_base_url: Url,
    pub session_cookie_name: String,
    pub session_cookie_secure: bool,
    pub backend_timeout_seconds: u64,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the backend client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let timeout = (args.backend_timeout_seconds > 0)
        .then(|| Duration::from_secs(args.backend_timeout_seconds));
    let config = BackendConfig::new(args.api_base_url).with_timeout(timeout);
    let client = SessionClient::new(&config).context("Failed to build REST API client")?;

    let cookie =
        SessionCookie::new(args.session_cookie_name).with_secure(args.session_cookie_secure);

    api::new(args.port, PanelState::new(client, cookie)).await
}

fn log_startup_args(args: &Args) {
    let timeout = if args.backend_timeout_seconds == 0 {
        "disabled".to_string()
    } else {
        format!("{}s", args.backend_timeout_seconds)
    };
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("api_base_url", args.api_base_url.to_string()),
        ("session_cookie", args.session_cookie_name.clone()),
        (
            "session_cookie_secure",
            args.session_cookie_secure.to_string(),
        ),
        ("backend_timeout", timeout),
    ];

    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!(
        "adminpanel {} - {}\n\nStartup configuration:",
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    );
    for (key, value) in &entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}
